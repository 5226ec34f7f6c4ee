//! Options accepted by decorated fields and rows.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::FormWowConfig;
use crate::widgets::{append_class_name, WidgetAttrs};

/// Options consumed by the row decorator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowOptions {
    /// Whether the required symbol is placed in the label.
    pub required: bool,
    /// Overrides the configured required symbol.
    pub required_symbol: Option<String>,
    /// Error messages; rendered joined by `, `. Empty means no error.
    #[serde(deserialize_with = "one_or_many")]
    pub error: Vec<String>,
    /// A short tip on how to fill out the field.
    pub hint: Option<String>,
    /// CSS class tokens added to the row container.
    pub class: Option<String>,
    /// Alias of `class`, accepted by `FormBuilder::row`.
    pub row_class: Option<String>,
    /// DOM id of the element that receives focus when the label is clicked.
    pub label_for: Option<String>,
}

/// Error text as written in configuration: one message or a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorText {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ErrorText::deserialize(deserializer)? {
        ErrorText::One(message) => vec![message],
        ErrorText::Many(messages) => messages,
    })
}

impl RowOptions {
    /// Creates empty row options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the row as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the required symbol.
    #[must_use]
    pub fn required_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.required_symbol = Some(symbol.into());
        self
    }

    /// Adds an error message.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error.push(message.into());
        self
    }

    /// Sets the hint.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets the row class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the row class through its alias.
    #[must_use]
    pub fn row_class(mut self, class: impl Into<String>) -> Self {
        self.row_class = Some(class.into());
        self
    }

    /// Sets the label `for` target.
    #[must_use]
    pub fn label_for(mut self, id: impl Into<String>) -> Self {
        self.label_for = Some(id.into());
        self
    }

    /// Moves `row_class` onto `class`, replacing any previous value.
    pub fn promote_row_class(&mut self) {
        if let Some(row_class) = self.row_class.take() {
            self.class = Some(row_class);
        }
    }

    /// Returns the error text, or `None` when there is no error.
    pub fn error_text(&self) -> Option<String> {
        (!self.error.is_empty()).then(|| self.error.join(", "))
    }

    /// Assembles the row container class list.
    ///
    /// Order: default row class, `invalid`, `required`, caller classes. A
    /// token never appears twice.
    pub fn css_classes(&self, config: &FormWowConfig) -> String {
        let mut css = config.default_row_class.clone();
        if !self.error.is_empty() {
            css = append_class_name(&css, "invalid");
        }
        if self.required {
            css = append_class_name(&css, "required");
        }
        if let Some(class) = &self.class {
            css = append_class_name(&css, class);
        }
        css
    }
}

/// Options accepted by decorated field operations.
///
/// Row-destined keys are typed fields; everything else is an HTML attribute
/// forwarded to the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Whether the field is required.
    pub required: bool,
    /// Overrides the configured required symbol.
    pub required_symbol: Option<String>,
    /// A short tip on how to fill out the field.
    pub hint: Option<String>,
    /// Explicit error messages; these win over the bound object's errors.
    pub error: Vec<String>,
    /// Extra CSS class tokens for the row container.
    pub row_class: Option<String>,
    /// Label text; defaults to the title-cased field name.
    pub label: Option<String>,
    /// DOM id of the field; defaults to the id convention.
    pub id: Option<String>,
    /// Remaining HTML attributes for the field itself.
    pub attrs: WidgetAttrs,
}

impl FieldOptions {
    /// Creates empty field options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the required symbol.
    #[must_use]
    pub fn required_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.required_symbol = Some(symbol.into());
        self
    }

    /// Sets the hint.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Adds an explicit error message.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error.push(message.into());
        self
    }

    /// Sets the row class.
    #[must_use]
    pub fn row_class(mut self, class: impl Into<String>) -> Self {
        self.row_class = Some(class.into());
        self
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the DOM id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a CSS class to the field itself.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.append_class(class);
        self
    }

    /// Sets an HTML attribute on the field.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}
