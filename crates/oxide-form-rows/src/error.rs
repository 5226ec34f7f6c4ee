//! Error types for form rows.

use std::collections::BTreeMap;
use thiserror::Error;

/// Form-row specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A decorated call named a field kind that was never registered.
    #[error("unknown helper method: {0}")]
    UnknownHelper(String),

    /// A decorator name that is not in the decorator registry.
    #[error("unknown row decorator: {0}")]
    UnknownDecorator(String),

    /// Configuration or record JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Record JSON was well-formed but not an object.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A caller-supplied block failed.
    #[error("block failed: {0}")]
    Block(String),
}

/// Collection of validation errors by field.
///
/// Messages keep their insertion order per field; fields iterate sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder method to add an error.
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns all errors as a flat list.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in self.all_errors() {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form-row operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_keep_order_per_field() {
        let errors = ValidationErrors::new()
            .with("email", "is required")
            .with("email", "is too short")
            .with("age", "is not a number");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("email"),
            Some(&vec!["is required".to_string(), "is too short".to_string()])
        );
        assert_eq!(
            errors.all_errors(),
            vec![
                ("age", "is not a number"),
                ("email", "is required"),
                ("email", "is too short"),
            ]
        );
    }

    #[test]
    fn test_display() {
        let errors = ValidationErrors::new().with("name", "is required");
        assert_eq!(errors.to_string(), "name: is required\n");
    }

    #[test]
    fn test_config_error_from_json() {
        let err: FormError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
