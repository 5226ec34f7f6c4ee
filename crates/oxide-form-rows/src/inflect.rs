//! Label text and DOM naming conventions.
//!
//! The id convention is a pure function of the object name and field name,
//! so a label's `for` attribute never has to be recovered from rendered
//! markup.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ID_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_id$").unwrap());

static WORD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(^|\s)([a-z])").unwrap());

static UNSAFE_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\[|[^-a-zA-Z0-9:.]").unwrap());

static VALUE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s.]").unwrap());

static VALUE_UNSAFE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^-\w]").unwrap());

/// Signature of a DOM id convention: `(object_name, field_name) -> id`.
pub type IdConvention = fn(&str, &str) -> String;

/// Turns a field name into human text: drops a trailing `_id` and replaces
/// underscores with spaces.
pub fn humanize(field: &str) -> String {
    ID_SUFFIX
        .replace(field, "")
        .replace('_', " ")
        .trim()
        .to_string()
}

/// Title-cases a field name.
///
/// ```rust
/// use oxide_form_rows::inflect::titleize;
///
/// assert_eq!(titleize("first_name"), "First Name");
/// assert_eq!(titleize("country_id"), "Country");
/// ```
pub fn titleize(field: &str) -> String {
    let human = humanize(field).to_lowercase();
    WORD_START
        .replace_all(&human, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

/// Sanitizes an object name for use as a DOM id prefix.
///
/// `person[address]` becomes `person_address`.
pub fn sanitize_object_name(object_name: &str) -> String {
    let replaced = UNSAFE_ID_CHARS.replace_all(object_name, "_");
    replaced.strip_suffix('_').unwrap_or(&replaced).to_string()
}

/// Default DOM id convention: `<sanitized object name>_<field>`, or the bare
/// field name when the form has no object name.
pub fn dom_id(object_name: &str, field: &str) -> String {
    let field = field.strip_suffix('?').unwrap_or(field);
    if object_name.is_empty() {
        field.to_string()
    } else {
        format!("{}_{field}", sanitize_object_name(object_name))
    }
}

/// Parameter name of a field: `object[field]`, or the bare field name.
pub fn field_name(object_name: &str, field: &str) -> String {
    if object_name.is_empty() {
        field.to_string()
    } else {
        format!("{object_name}[{field}]")
    }
}

/// Sanitizes a tag value (radio buttons) for use as an id suffix.
pub fn sanitize_value(value: &str) -> String {
    let spaced = VALUE_SEPARATORS.replace_all(value, "_");
    VALUE_UNSAFE.replace_all(&spaced, "").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titleize() {
        assert_eq!(titleize("first_name"), "First Name");
        assert_eq!(titleize("email"), "Email");
        assert_eq!(titleize("country_id"), "Country");
        assert_eq!(titleize("DATE_of_birth"), "Date Of Birth");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("last_login_at"), "last login at");
        assert_eq!(humanize("author_id"), "author");
    }

    #[test]
    fn test_dom_id() {
        assert_eq!(dom_id("person", "first_name"), "person_first_name");
        assert_eq!(dom_id("", "first_name"), "first_name");
        assert_eq!(dom_id("person[address]", "street"), "person_address_street");
        assert_eq!(dom_id("person", "admin?"), "person_admin");
    }

    #[test]
    fn test_sanitize_object_name() {
        assert_eq!(sanitize_object_name("person"), "person");
        assert_eq!(sanitize_object_name("person[address]"), "person_address");
        assert_eq!(
            sanitize_object_name("order[lines][0]"),
            "order_lines_0"
        );
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("person", "email"), "person[email]");
        assert_eq!(field_name("", "email"), "email");
    }

    #[test]
    fn test_sanitize_value() {
        assert_eq!(sanitize_value("Mr. Smith"), "mr__smith");
        assert_eq!(sanitize_value("yes!"), "yes");
    }
}
