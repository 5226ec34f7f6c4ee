//! Raw field widgets.
//!
//! These produce the undecorated field markup that the builder wraps in a
//! row. Attribute order is deterministic so rendered fields compare equal.

mod fields;

pub use fields::{
    CheckBox, DateInput, FileInput, PasswordInput, RadioButton, Select, TextArea, TextInput,
};

use std::collections::BTreeMap;

/// Attributes that can be applied to a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    /// HTML attributes, rendered in key order.
    pub attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    /// Adds a CSS class token unless it is already present.
    pub fn append_class(&mut self, class_name: &str) {
        let current = self.attrs.get("class").map_or("", String::as_str);
        let merged = append_class_name(current, class_name);
        if !merged.is_empty() {
            self.attrs.insert("class".to_string(), merged);
        }
    }

    /// Renders attributes as an HTML attribute string, each with a leading
    /// space.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Trait for widgets that render a raw form field.
pub trait Widget {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The parameter name (used for the name attribute)
    /// * `value` - The current value from the bound object (if any)
    /// * `attrs` - HTML attributes, including `id` and `class`
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// Merges class tokens as a set union, keeping first-seen order.
///
/// ```rust
/// use oxide_form_rows::widgets::append_class_name;
///
/// assert_eq!(append_class_name("text", "invalid"), "text invalid");
/// assert_eq!(append_class_name("text invalid", "invalid"), "text invalid");
/// ```
pub fn append_class_name(existing: &str, class_name: &str) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in existing.split_whitespace().chain(class_name.split_whitespace()) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

/// Wraps a field the way the host framework marks invalid fields.
pub fn wrap_field_with_errors(field_html: &str) -> String {
    format!(r#"<div class="field_with_errors">{field_html}</div>"#)
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
