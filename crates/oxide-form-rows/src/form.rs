//! The form-row environment and form-level helpers.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Form};
use tracing::debug;

use crate::builder::FormBuilder;
use crate::config::FormWowConfig;
use crate::error::Result;
use crate::inflect::{dom_id, IdConvention};
use crate::object::FormObject;
use crate::registry::HelperRegistry;
use crate::row::{DecoratorRegistry, RowDecorator};
use crate::template::Template;

/// Configuration, decorated field kinds and row decorators shared by every
/// builder it opens.
///
/// Built once per application; builders borrow it for a single render pass.
#[derive(Debug, Clone)]
pub struct FormWow {
    config: FormWowConfig,
    helpers: HelperRegistry,
    decorators: DecoratorRegistry,
    id_convention: IdConvention,
}

impl Default for FormWow {
    fn default() -> Self {
        Self::new(FormWowConfig::default())
    }
}

impl FormWow {
    /// Creates an environment, registering the config's custom helpers next
    /// to the built-in ones.
    pub fn new(config: FormWowConfig) -> Self {
        let mut helpers = HelperRegistry::new();
        for spec in &config.custom_helpers {
            helpers.register(spec.clone());
        }
        debug!(
            helpers = helpers.names().count(),
            decorator = %config.default_decorator,
            "Created form environment"
        );
        Self {
            config,
            helpers,
            decorators: DecoratorRegistry::new(),
            id_convention: dom_id,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FormWowConfig {
        &self.config
    }

    /// Returns the decorated field kinds.
    pub fn helpers(&self) -> &HelperRegistry {
        &self.helpers
    }

    /// Returns the row decorators.
    pub fn decorators(&self) -> &DecoratorRegistry {
        &self.decorators
    }

    /// Makes another field-rendering operation decoratable.
    ///
    /// ```rust
    /// use oxide_form_rows::FormWow;
    ///
    /// let mut wow = FormWow::default();
    /// wow.upgrade_helper_method("tinymce", "tinymce", false);
    /// assert!(wow.helpers().contains("tinymce"));
    /// ```
    pub fn upgrade_helper_method(
        &mut self,
        method_name: &str,
        row_class: &str,
        append_class_to_field: bool,
    ) -> &mut Self {
        self.helpers
            .upgrade_helper_method(method_name, row_class, append_class_to_field);
        self
    }

    /// Registers a row decorator under a name.
    pub fn register_decorator(
        &mut self,
        name: &str,
        decorator: impl RowDecorator + 'static,
    ) -> &mut Self {
        self.decorators.register(name, decorator);
        self
    }

    /// Replaces the DOM id convention.
    #[must_use]
    pub fn with_id_convention(mut self, convention: IdConvention) -> Self {
        self.id_convention = convention;
        self
    }

    /// Applies the DOM id convention.
    pub fn dom_id(&self, object_name: &str, field: &str) -> String {
        (self.id_convention)(object_name, field)
    }

    /// Opens a builder writing to `template`.
    ///
    /// Fails when the configured default decorator is not registered.
    pub fn builder<'a>(
        &'a self,
        template: &'a Template,
        object_name: &str,
        object: Option<&'a dyn FormObject>,
    ) -> Result<FormBuilder<'a>> {
        FormBuilder::new(self, template, object_name, object)
    }

    /// Renders the block's fields without a surrounding `<form>` element.
    pub fn fields_for<F>(
        &self,
        object_name: &str,
        object: Option<&dyn FormObject>,
        block: F,
    ) -> Result<String>
    where
        F: FnOnce(&FormBuilder<'_>) -> Result<()>,
    {
        let template = Template::new();
        let builder = self.builder(&template, object_name, object)?;
        block(&builder)?;
        drop(builder);
        Ok(template.into_string())
    }

    /// Renders a `<form>` element around the block's fields.
    ///
    /// ```rust
    /// use oxide_form_rows::{FieldOptions, FormTag, FormWow};
    ///
    /// let wow = FormWow::default();
    /// let html = wow
    ///     .form_for("person", None, &FormTag::new("/people"), |f| {
    ///         f.concat(f.text_field("email", FieldOptions::new().required()));
    ///         Ok(())
    ///     })
    ///     .unwrap();
    /// assert!(html.starts_with("<form"));
    /// assert!(html.contains("person[email]"));
    /// ```
    pub fn form_for<F>(
        &self,
        object_name: &str,
        object: Option<&dyn FormObject>,
        tag: &FormTag,
        block: F,
    ) -> Result<String>
    where
        F: FnOnce(&FormBuilder<'_>) -> Result<()>,
    {
        let content = self.fields_for(object_name, object, block)?;
        Ok(tag.wrap(&content))
    }
}

/// Attributes of the `<form>` element rendered by [`FormWow::form_for`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTag {
    /// Submission URL.
    pub action: String,
    /// HTTP method.
    pub method: String,
    /// CSS class of the form.
    pub class: Option<String>,
    /// DOM id of the form.
    pub id: Option<String>,
}

impl FormTag {
    /// Creates a POST form tag for `action`.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: "post".to_string(),
            class: None,
            id: None,
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the DOM id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Wraps rendered fields in the `<form>` element, inside one `<div>`.
    pub fn wrap(&self, content: &str) -> String {
        let class = self.class.as_deref();
        let id = self.id.as_deref();
        Element::<Form>::new()
            .attr("action", &self.action)
            .attr("method", &self.method)
            .when(class.is_some(), |f| f.class(class.unwrap_or_default()))
            .when(id.is_some(), |f| f.attr("id", id.unwrap_or_default()))
            .child::<Div, _>(|d| d.raw(content))
            .render()
    }
}
