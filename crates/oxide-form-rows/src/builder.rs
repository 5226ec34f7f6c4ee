//! The field-decorating form builder.
//!
//! Every field operation runs through one decoration wrapper: it splits the
//! options into row options and widget attributes, renders the raw widget
//! and, unless decoration is suppressed, hands the result to the bound row
//! decorator. The wrapper only varies by the [`HelperSpec`] registered for
//! the field kind.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::GroupingMode;
use crate::error::{FormError, Result};
use crate::form::FormWow;
use crate::inflect::{field_name, titleize};
use crate::object::FormObject;
use crate::options::{FieldOptions, RowOptions};
use crate::registry::HelperSpec;
use crate::row::RowDecorator;
use crate::template::Template;
use crate::widgets::{
    append_class_name, wrap_field_with_errors, CheckBox, DateInput, FileInput, PasswordInput,
    RadioButton, Select, TextArea, TextInput, Widget,
};

/// Decoration flags and the errors buffered while grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DecorationState {
    decorating: bool,
    grouping: bool,
    errors: Vec<String>,
}

impl DecorationState {
    const fn idle() -> Self {
        Self {
            decorating: true,
            grouping: false,
            errors: Vec::new(),
        }
    }

    const fn scoped(decorating: bool) -> Self {
        Self {
            decorating,
            grouping: true,
            errors: Vec::new(),
        }
    }
}

/// Restores the enclosing decoration state when a scope ends, however it
/// ends.
struct ScopeGuard<'s> {
    state: &'s RefCell<DecorationState>,
    saved: Option<DecorationState>,
}

impl<'s> ScopeGuard<'s> {
    fn enter(state: &'s RefCell<DecorationState>, scoped: DecorationState) -> Self {
        let saved = state.replace(scoped);
        Self {
            state,
            saved: Some(saved),
        }
    }

    fn take_errors(&self) -> Vec<String> {
        std::mem::take(&mut self.state.borrow_mut().errors)
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.state.replace(saved);
        }
    }
}

/// A form builder whose field operations produce decorated rows.
///
/// Field operations return their markup; block operations (`row`,
/// `no_decoration`, `fields_for`) append to the shared [`Template`].
///
/// ```rust
/// use oxide_form_rows::{FieldOptions, FormWow, RowOptions, Template};
///
/// let wow = FormWow::default();
/// let template = Template::new();
/// let form = wow.builder(&template, "person", None).unwrap();
///
/// form.row("Name", RowOptions::new(), |f| {
///     f.concat(f.text_field("first_name", FieldOptions::new()));
///     f.concat(f.text_field("last_name", FieldOptions::new()));
///     Ok(())
/// })
/// .unwrap();
/// drop(form);
///
/// let html = template.into_string();
/// assert!(html.contains("person_first_name"));
/// ```
pub struct FormBuilder<'a> {
    wow: &'a FormWow,
    template: &'a Template,
    object_name: String,
    object: Option<&'a dyn FormObject>,
    decorator: Arc<dyn RowDecorator>,
    grouping_mode: GroupingMode,
    state: Rc<RefCell<DecorationState>>,
}

impl std::fmt::Debug for FormBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBuilder")
            .field("object_name", &self.object_name)
            .field("has_object", &self.object.is_some())
            .field("grouping_mode", &self.grouping_mode)
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl<'a> FormBuilder<'a> {
    /// Creates a builder bound to the environment's default decorator.
    pub fn new(
        wow: &'a FormWow,
        template: &'a Template,
        object_name: impl Into<String>,
        object: Option<&'a dyn FormObject>,
    ) -> Result<Self> {
        let config = wow.config();
        let decorator = wow.decorators().resolve(&config.default_decorator)?;
        let object_name = object_name.into();
        debug!(
            object = %object_name,
            decorator = %config.default_decorator,
            "Opening form builder"
        );
        Ok(Self {
            wow,
            template,
            object_name,
            object,
            decorator,
            grouping_mode: config.grouping_mode,
            state: Rc::new(RefCell::new(DecorationState::idle())),
        })
    }

    /// Rebinds this builder to another registered decorator.
    pub fn set_decorator(&mut self, name: &str) -> Result<()> {
        self.decorator = self.wow.decorators().resolve(name)?;
        Ok(())
    }

    /// Builder-style [`set_decorator`](Self::set_decorator).
    pub fn with_decorator(mut self, name: &str) -> Result<Self> {
        self.set_decorator(name)?;
        Ok(self)
    }

    /// Sets the grouping mode used by [`row`](Self::row).
    pub fn set_grouping_mode(&mut self, mode: GroupingMode) {
        self.grouping_mode = mode;
    }

    /// Returns the object name used for parameter names and DOM ids.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Returns the bound data object, if any.
    pub fn object(&self) -> Option<&'a dyn FormObject> {
        self.object
    }

    /// Returns the template this builder writes to.
    pub fn template(&self) -> &'a Template {
        self.template
    }

    /// Whether field operations currently wrap their output in a row.
    pub fn is_decorating(&self) -> bool {
        self.state.borrow().decorating
    }

    /// Whether field errors are currently buffered for a parent row.
    pub fn is_grouping(&self) -> bool {
        self.state.borrow().grouping
    }

    /// Errors buffered so far in the current grouping scope.
    pub fn grouped_errors(&self) -> Vec<String> {
        self.state.borrow().errors.clone()
    }

    /// Appends markup to the template.
    pub fn concat(&self, markup: impl AsRef<str>) {
        self.template.concat(markup);
    }

    /// Returns the DOM id of a field under this builder's object name.
    pub fn dom_id(&self, field: &str) -> String {
        self.wow.dom_id(&self.object_name, field)
    }

    /// Decorated single-line text input.
    pub fn text_field(&self, field: &str, options: FieldOptions) -> String {
        self.builtin("text_field", field, &TextInput, options)
    }

    /// Decorated password input.
    pub fn password_field(&self, field: &str, options: FieldOptions) -> String {
        self.builtin("password_field", field, &PasswordInput, options)
    }

    /// Decorated file input.
    pub fn file_field(&self, field: &str, options: FieldOptions) -> String {
        self.builtin("file_field", field, &FileInput, options)
    }

    /// Decorated date picker.
    pub fn date_field(&self, field: &str, options: FieldOptions) -> String {
        self.builtin("date_field", field, &DateInput, options)
    }

    /// Decorated checkbox.
    pub fn check_box(
        &self,
        field: &str,
        options: FieldOptions,
        checked_value: &str,
        unchecked_value: &str,
    ) -> String {
        let widget = CheckBox::new(checked_value, unchecked_value);
        self.builtin("check_box", field, &widget, options)
    }

    /// Decorated radio button for one tag value.
    pub fn radio_button(&self, field: &str, tag_value: &str, options: FieldOptions) -> String {
        self.builtin("radio_button", field, &RadioButton::new(tag_value), options)
    }

    /// Decorated text area.
    pub fn text_area(&self, field: &str, options: FieldOptions) -> String {
        self.builtin("text_area", field, &TextArea::default(), options)
    }

    /// Decorated select.
    pub fn select<V, L>(
        &self,
        field: &str,
        choices: impl IntoIterator<Item = (V, L)>,
        options: FieldOptions,
    ) -> String
    where
        V: Into<String>,
        L: Into<String>,
    {
        self.builtin("select", field, &Select::new(choices), options)
    }

    /// Decorated call of any registered field kind with a caller-supplied
    /// widget.
    ///
    /// Fails with [`FormError::UnknownHelper`] when `method_name` was never
    /// registered.
    pub fn helper(
        &self,
        method_name: &str,
        field: &str,
        widget: &dyn Widget,
        options: FieldOptions,
    ) -> Result<String> {
        let spec = self
            .wow
            .helpers()
            .get(method_name)
            .ok_or_else(|| FormError::UnknownHelper(method_name.to_string()))?;
        Ok(self.decorate(spec, field, widget, options))
    }

    fn builtin(
        &self,
        method_name: &str,
        field: &str,
        widget: &dyn Widget,
        options: FieldOptions,
    ) -> String {
        self.decorate(&self.wow.helpers()[method_name], field, widget, options)
    }

    fn object_errors(&self, field: &str) -> Vec<String> {
        match self.object {
            Some(object) => object.errors_on(field),
            None => {
                debug!(field = %field, "No object bound, skipping error lookup");
                Vec::new()
            }
        }
    }

    fn decorate(
        &self,
        spec: &HelperSpec,
        field: &str,
        widget: &dyn Widget,
        options: FieldOptions,
    ) -> String {
        let FieldOptions {
            required,
            required_symbol,
            hint,
            error,
            row_class,
            label,
            id,
            mut attrs,
        } = options;

        let label = label.unwrap_or_else(|| titleize(field));
        let label_for = id
            .or_else(|| attrs.remove("id"))
            .unwrap_or_else(|| self.dom_id(field));
        attrs.set("id", label_for.clone());

        let grouping = self.is_grouping();
        let mut errors = if error.is_empty() {
            self.object_errors(field)
        } else {
            error
        };
        if grouping && !errors.is_empty() {
            let name = titleize(field);
            errors = errors
                .into_iter()
                .map(|message| format!("{name} {message}"))
                .collect();
        }

        let mut row_css = row_class.unwrap_or_default();
        if spec.append_class_to_field {
            attrs.append_class(&spec.row_class);
            if !errors.is_empty() {
                attrs.append_class("invalid");
            }
        } else {
            row_css = append_class_name(&row_css, &spec.row_class);
        }

        let value = self.object.and_then(|object| object.value(field));
        let mut markup = widget.render(
            &field_name(&self.object_name, field),
            value.as_deref(),
            &attrs,
        );
        if !errors.is_empty() && self.wow.config().wrap_field_errors {
            markup = wrap_field_with_errors(&markup);
        }

        let (decorating, inline_errors) = {
            let mut state = self.state.borrow_mut();
            if state.grouping {
                state.errors.extend(errors);
                (state.decorating, Vec::new())
            } else {
                (state.decorating, errors)
            }
        };

        trace!(
            helper = %spec.name,
            field = %field,
            input_type = %widget.input_type(),
            decorating,
            grouping,
            "Rendering field"
        );

        if !decorating {
            return markup;
        }

        let row_options = RowOptions {
            required,
            required_symbol,
            error: inline_errors,
            hint,
            class: (!row_css.is_empty()).then_some(row_css),
            row_class: None,
            label_for: Some(label_for),
        };
        self.decorator
            .decorate(&markup, &label, &row_options, self.wow.config())
    }

    /// Wraps everything the block renders in one row, using the builder's
    /// grouping mode.
    ///
    /// Errors of fields inside the block are summarised on the row (joined
    /// with `, `) unless `options` carries an explicit error. `row_class` is
    /// accepted as an alias of `class`.
    pub fn row<F>(&self, label: &str, options: RowOptions, block: F) -> Result<()>
    where
        F: FnOnce(&Self) -> Result<()>,
    {
        self.row_with_mode(self.grouping_mode, label, options, block)
    }

    /// [`row`](Self::row) with an explicit grouping mode.
    pub fn row_with_mode<F>(
        &self,
        mode: GroupingMode,
        label: &str,
        mut options: RowOptions,
        block: F,
    ) -> Result<()>
    where
        F: FnOnce(&Self) -> Result<()>,
    {
        let scoped = match mode {
            GroupingMode::Wrap => DecorationState::scoped(false),
            GroupingMode::Summary => DecorationState::scoped(true),
        };
        let guard = ScopeGuard::enter(&self.state, scoped);
        let content = self.template.capture(|| block(self))?;
        let grouped = guard.take_errors();
        drop(guard);

        options.promote_row_class();
        if options.error.is_empty() && !grouped.is_empty() {
            options.error = vec![grouped.join(", ")];
        }

        trace!(label = %label, mode = ?mode, errors = options.error.len(), "Rendering row");
        self.concat(
            self.decorator
                .decorate(&content, label, &options, self.wow.config()),
        );
        Ok(())
    }

    /// Renders the block without any row decoration.
    pub fn no_decoration<F>(&self, block: F) -> Result<()>
    where
        F: FnOnce(&Self) -> Result<()>,
    {
        let _guard = ScopeGuard::enter(&self.state, DecorationState::scoped(false));
        let content = self.template.capture(|| block(self))?;
        self.concat(content);
        Ok(())
    }

    /// Runs the block with a nested builder for `object_name[child]`.
    ///
    /// The nested builder shares this builder's template, decorator and
    /// decoration state.
    pub fn fields_for<F>(
        &self,
        child: &str,
        object: Option<&dyn FormObject>,
        block: F,
    ) -> Result<()>
    where
        F: FnOnce(&FormBuilder<'_>) -> Result<()>,
    {
        let nested = FormBuilder {
            wow: self.wow,
            template: self.template,
            object_name: field_name(&self.object_name, child),
            object,
            decorator: Arc::clone(&self.decorator),
            grouping_mode: self.grouping_mode,
            state: Rc::clone(&self.state),
        };
        block(&nested)
    }
}
