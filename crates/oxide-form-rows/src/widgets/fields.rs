//! Plain HTML field widgets for the built-in field kinds.

use super::{html_escape, Widget, WidgetAttrs};
use crate::inflect::sanitize_value;

fn input_tag(input_type: &str, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
    let value_attr = value
        .map(|v| format!(r#" value="{}""#, html_escape(v)))
        .unwrap_or_default();
    format!(
        r#"<input type="{input_type}" name="{}"{value_attr}{}>"#,
        html_escape(name),
        attrs.to_html()
    )
}

/// Single-line text input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInput;

impl Widget for TextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        input_tag("text", name, value, attrs)
    }
}

/// Password input. Never echoes the current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordInput;

impl Widget for PasswordInput {
    fn render(&self, name: &str, _value: Option<&str>, attrs: &WidgetAttrs) -> String {
        input_tag("password", name, None, attrs)
    }

    fn input_type(&self) -> &str {
        "password"
    }
}

/// File upload input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileInput;

impl Widget for FileInput {
    fn render(&self, name: &str, _value: Option<&str>, attrs: &WidgetAttrs) -> String {
        input_tag("file", name, None, attrs)
    }

    fn input_type(&self) -> &str {
        "file"
    }
}

/// Date picker input.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateInput;

impl Widget for DateInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        input_tag("date", name, value, attrs)
    }

    fn input_type(&self) -> &str {
        "date"
    }
}

/// Checkbox preceded by a hidden input carrying the unchecked value.
#[derive(Debug, Clone)]
pub struct CheckBox {
    /// Value submitted when checked.
    pub checked_value: String,
    /// Value submitted when unchecked.
    pub unchecked_value: String,
}

impl Default for CheckBox {
    fn default() -> Self {
        Self {
            checked_value: "1".to_string(),
            unchecked_value: "0".to_string(),
        }
    }
}

impl CheckBox {
    /// Creates a checkbox with the given checked and unchecked values.
    pub fn new(checked_value: impl Into<String>, unchecked_value: impl Into<String>) -> Self {
        Self {
            checked_value: checked_value.into(),
            unchecked_value: unchecked_value.into(),
        }
    }
}

impl Widget for CheckBox {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let checked = value.is_some_and(|v| v == self.checked_value);
        let checked_attr = if checked { r#" checked="checked""# } else { "" };
        format!(
            r#"<input type="hidden" name="{name}" value="{}"><input type="checkbox" name="{name}" value="{}"{checked_attr}{}>"#,
            html_escape(&self.unchecked_value),
            html_escape(&self.checked_value),
            attrs.to_html(),
            name = html_escape(name),
        )
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }
}

/// One radio button of a group.
///
/// The rendered id is suffixed with the sanitized tag value so buttons of
/// the same field stay unique.
#[derive(Debug, Clone)]
pub struct RadioButton {
    /// Value submitted when this button is selected.
    pub tag_value: String,
}

impl RadioButton {
    /// Creates a radio button for the given tag value.
    pub fn new(tag_value: impl Into<String>) -> Self {
        Self {
            tag_value: tag_value.into(),
        }
    }
}

impl Widget for RadioButton {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut attrs = attrs.clone();
        if let Some(id) = attrs.remove("id") {
            attrs.set("id", format!("{id}_{}", sanitize_value(&self.tag_value)));
        }
        if value.is_some_and(|v| v == self.tag_value) {
            attrs.set("checked", "checked");
        }
        input_tag("radio", name, Some(&self.tag_value), &attrs)
    }

    fn input_type(&self) -> &str {
        "radio"
    }
}

/// Multi-line text area.
#[derive(Debug, Clone)]
pub struct TextArea {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Default for TextArea {
    fn default() -> Self {
        Self { rows: 4, cols: 40 }
    }
}

impl TextArea {
    /// Creates a text area with the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl Widget for TextArea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let content = value.map(html_escape).unwrap_or_default();
        format!(
            r#"<textarea name="{}" rows="{}" cols="{}"{}>{content}</textarea>"#,
            html_escape(name),
            self.rows,
            self.cols,
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

/// Dropdown select.
#[derive(Debug, Clone)]
pub struct Select {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
    /// Whether to include an empty option first.
    pub include_blank: bool,
    /// Label for the blank option.
    pub blank_label: String,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
            include_blank: false,
            blank_label: String::new(),
        }
    }
}

impl Select {
    /// Creates a new select with the given choices.
    pub fn new<V: Into<String>, L: Into<String>>(
        choices: impl IntoIterator<Item = (V, L)>,
    ) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            ..Default::default()
        }
    }

    /// Adds a blank option with the given label.
    #[must_use]
    pub fn include_blank(mut self, label: impl Into<String>) -> Self {
        self.include_blank = true;
        self.blank_label = label.into();
        self
    }
}

impl Widget for Select {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut options = String::new();

        if self.include_blank {
            options.push_str(&format!(
                r#"<option value="">{}</option>"#,
                html_escape(&self.blank_label)
            ));
        }

        for (opt_value, label) in &self.choices {
            let selected = value.is_some_and(|v| v == opt_value);
            let selected_attr = if selected { r#" selected="selected""# } else { "" };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(opt_value),
                html_escape(label)
            ));
        }

        format!(
            r#"<select name="{}"{}>{options}</select>"#,
            html_escape(name),
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}
