//! Row decoration: turning field markup into a labelled form row.

use std::collections::BTreeMap;
use std::sync::Arc;

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Label, Span, P};
use tracing::debug;

use crate::config::{FormWowConfig, FORM_WOW_ROW};
use crate::error::{FormError, Result};
use crate::options::RowOptions;

/// Turns `(content, label, options)` into the markup of one form row.
pub trait RowDecorator: Send + Sync {
    /// Decorates pre-rendered field markup.
    fn decorate(
        &self,
        content: &str,
        label: &str,
        options: &RowOptions,
        config: &FormWowConfig,
    ) -> String;
}

impl<F> RowDecorator for F
where
    F: Fn(&str, &str, &RowOptions, &FormWowConfig) -> String + Send + Sync,
{
    fn decorate(
        &self,
        content: &str,
        label: &str,
        options: &RowOptions,
        config: &FormWowConfig,
    ) -> String {
        self(content, label, options, config)
    }
}

/// The standard row decorator, registered as `form_wow_row`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormWowRow;

impl RowDecorator for FormWowRow {
    fn decorate(
        &self,
        content: &str,
        label: &str,
        options: &RowOptions,
        config: &FormWowConfig,
    ) -> String {
        form_wow_row(content, label, options, config)
    }
}

/// Builds a fully decorated form row.
///
/// The row is a `div` holding, in order: the label (with the required
/// symbol when `required` is set), the error span, the hint paragraph and
/// the content. Content is inserted as markup; label, error and hint text
/// are escaped.
///
/// ```rust
/// use oxide_form_rows::{form_wow_row, FormWowConfig, RowOptions};
///
/// let html = form_wow_row(
///     r#"<input type="text" name="email">"#,
///     "Email",
///     &RowOptions::new().required().hint("We never share it"),
///     &FormWowConfig::default(),
/// );
/// assert!(html.contains("required_symbol"));
/// assert!(html.contains("We never share it"));
/// ```
pub fn form_wow_row(
    content: &str,
    label: &str,
    options: &RowOptions,
    config: &FormWowConfig,
) -> String {
    let symbol = options
        .required_symbol
        .as_deref()
        .unwrap_or(&config.required_symbol);
    let label_for = options.label_for.as_deref();

    let label_el = Element::<Label>::new()
        .when(label_for.is_some(), |l| l.attr("for", label_for.unwrap_or_default()))
        .when(options.required, |l| {
            l.child::<Span, _>(|s| s.class("required_symbol").text(symbol))
        })
        .child::<Span, _>(|s| s.class("label").text(label));

    let error = options.error_text();
    let hint = options.hint.as_deref();
    let css = options.css_classes(config);

    Element::<Div>::new()
        .class(&css)
        .raw(label_el.render())
        .when(error.is_some(), |d| {
            d.child::<Span, _>(|s| {
                s.class("error")
                    .text(error.as_deref().unwrap_or_default())
            })
        })
        .when(hint.is_some(), |d| {
            d.child::<P, _>(|p| p.class("hint").text(hint.unwrap_or_default()))
        })
        .raw(content)
        .render()
}

/// Row decorators available by name.
#[derive(Clone)]
pub struct DecoratorRegistry {
    decorators: BTreeMap<String, Arc<dyn RowDecorator>>,
}

impl std::fmt::Debug for DecoratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoratorRegistry")
            .field("names", &self.decorators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for DecoratorRegistry {
    fn default() -> Self {
        let mut registry = Self {
            decorators: BTreeMap::new(),
        };
        registry.register(FORM_WOW_ROW, FormWowRow);
        registry
    }
}

impl DecoratorRegistry {
    /// Creates a registry holding `form_wow_row`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a decorator under a name, replacing any previous one.
    pub fn register(&mut self, name: &str, decorator: impl RowDecorator + 'static) -> &mut Self {
        debug!(decorator = %name, "Registering row decorator");
        self.decorators
            .insert(name.to_string(), Arc::new(decorator));
        self
    }

    /// Resolves a decorator by name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn RowDecorator>> {
        self.decorators
            .get(name)
            .cloned()
            .ok_or_else(|| FormError::UnknownDecorator(name.to_string()))
    }
}
