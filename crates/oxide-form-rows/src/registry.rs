//! Registry of decorated field kinds.
//!
//! Every decorated field operation runs through the same wrapper in
//! [`FormBuilder`](crate::FormBuilder); the registry only records what that
//! wrapper needs to know about each kind.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a field kind is decorated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperSpec {
    /// Name of the field operation, e.g. `text_field`.
    pub name: String,
    /// Class describing the field kind, e.g. `text`.
    pub row_class: String,
    /// Whether `row_class` (and `invalid`) go on the field itself. Structural
    /// kinds put `row_class` on the row container instead.
    pub append_class_to_field: bool,
}

impl HelperSpec {
    /// Creates a helper spec.
    pub fn new(
        name: impl Into<String>,
        row_class: impl Into<String>,
        append_class_to_field: bool,
    ) -> Self {
        Self {
            name: name.into(),
            row_class: row_class.into(),
            append_class_to_field,
        }
    }
}

const BUILTIN_HELPERS: [(&str, &str, bool); 8] = [
    ("text_field", "text", true),
    ("password_field", "password", true),
    ("file_field", "file", true),
    ("check_box", "checkbox", true),
    ("radio_button", "radio", true),
    ("text_area", "textarea", false),
    ("select", "select", false),
    ("date_field", "date", true),
];

/// Field kinds known to a [`FormWow`](crate::FormWow) environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperRegistry {
    helpers: BTreeMap<String, HelperSpec>,
}

impl Default for HelperRegistry {
    fn default() -> Self {
        let mut registry = Self {
            helpers: BTreeMap::new(),
        };
        for (name, row_class, append) in BUILTIN_HELPERS {
            registry.upgrade_helper_method(name, row_class, append);
        }
        registry
    }
}

impl HelperRegistry {
    /// Creates a registry holding the built-in field kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or re-registers) a decorated field kind.
    ///
    /// Registering the same arguments twice leaves the registry unchanged.
    pub fn upgrade_helper_method(
        &mut self,
        method_name: &str,
        row_class: &str,
        append_class_to_field: bool,
    ) -> &mut Self {
        debug!(
            helper = %method_name,
            row_class = %row_class,
            append_class_to_field,
            "Registering decorated helper"
        );
        self.register(HelperSpec::new(method_name, row_class, append_class_to_field))
    }

    /// Registers a helper spec.
    pub fn register(&mut self, spec: HelperSpec) -> &mut Self {
        self.helpers.insert(spec.name.clone(), spec);
        self
    }

    /// Looks up a field kind.
    pub fn get(&self, method_name: &str) -> Option<&HelperSpec> {
        self.helpers.get(method_name)
    }

    /// Returns whether a field kind is registered.
    pub fn contains(&self, method_name: &str) -> bool {
        self.helpers.contains_key(method_name)
    }

    /// Returns the registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }
}

impl Index<&str> for HelperRegistry {
    type Output = HelperSpec;

    /// # Panics
    ///
    /// Panics if `method_name` is not registered. Built-in kinds are always
    /// registered.
    fn index(&self, method_name: &str) -> &HelperSpec {
        &self.helpers[method_name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins() {
        let registry = HelperRegistry::new();
        assert_eq!(registry.names().count(), 8);
        let text = registry.get("text_field").unwrap();
        assert_eq!(text.row_class, "text");
        assert!(text.append_class_to_field);
        let select = registry.get("select").unwrap();
        assert!(!select.append_class_to_field);
        assert!(!registry.get("text_area").unwrap().append_class_to_field);
    }

    #[test]
    fn test_upgrade_helper_method_is_idempotent() {
        let mut once = HelperRegistry::new();
        once.upgrade_helper_method("tinymce", "tinymce", false);

        let mut twice = HelperRegistry::new();
        twice
            .upgrade_helper_method("tinymce", "tinymce", false)
            .upgrade_helper_method("tinymce", "tinymce", false);

        assert_eq!(once, twice);
        assert!(twice.contains("tinymce"));
    }

    #[test]
    fn test_reregister_replaces_spec() {
        let mut registry = HelperRegistry::new();
        registry.upgrade_helper_method("select", "choice", true);
        let select = registry.get("select").unwrap();
        assert_eq!(select.row_class, "choice");
        assert!(select.append_class_to_field);
    }

    #[test]
    fn test_index_by_name() {
        let registry = HelperRegistry::new();
        assert_eq!(registry["date_field"].row_class, "date");
        assert_eq!(&registry["check_box"], registry.get("check_box").unwrap());
    }
}
