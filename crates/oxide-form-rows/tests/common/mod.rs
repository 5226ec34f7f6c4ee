#![allow(dead_code)]

use oxide_form_rows::{FormBuilder, FormObject, FormWow, FormWowConfig, Result};

/// Environment without the `field_with_errors` wrapper, so field markup is
/// easy to match.
pub fn wow() -> FormWow {
    FormWow::new(FormWowConfig::new().nuke_field_with_errors())
}

/// Renders a block under the `person` object name.
pub fn render<F>(wow: &FormWow, object: Option<&dyn FormObject>, block: F) -> String
where
    F: FnOnce(&FormBuilder<'_>) -> Result<()>,
{
    wow.fields_for("person", object, block)
        .unwrap_or_else(|e| panic!("Failed to render: {e}"))
}

/// Returns the text between `start` and the next `end` after it.
pub fn between<'h>(html: &'h str, start: &str, end: &str) -> &'h str {
    let from = html
        .find(start)
        .unwrap_or_else(|| panic!("Missing {start} in {html}"))
        + start.len();
    let to = html[from..]
        .find(end)
        .unwrap_or_else(|| panic!("Missing {end} after {start} in {html}"));
    &html[from..from + to]
}
