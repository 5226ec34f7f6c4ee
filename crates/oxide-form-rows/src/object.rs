//! Data objects a form builder can be bound to.

use serde_json::{Map, Value};

use crate::error::{FormError, Result, ValidationErrors};

/// The data object behind a form: current values and validation errors.
pub trait FormObject {
    /// Returns the current value of a field, as it should appear in markup.
    fn value(&self, field: &str) -> Option<String>;

    /// Returns the validation error messages for a field.
    fn errors_on(&self, field: &str) -> Vec<String>;
}

impl FormObject for ValidationErrors {
    fn value(&self, _field: &str) -> Option<String> {
        None
    }

    fn errors_on(&self, field: &str) -> Vec<String> {
        self.get(field).cloned().unwrap_or_default()
    }
}

/// A plain record of JSON values with attached validation errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Field values.
    pub values: Map<String, Value>,
    /// Validation errors by field.
    pub errors: ValidationErrors,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value.
    #[must_use]
    pub fn with_value(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    /// Adds a validation error.
    #[must_use]
    pub fn with_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.errors.add(field, message);
        self
    }

    /// Parses a record from a JSON object.
    ///
    /// An optional `errors` key maps field names to a message or a list of
    /// messages; every other key is a field value.
    ///
    /// ```rust
    /// use oxide_form_rows::{FormObject, Record};
    ///
    /// let record = Record::from_json(
    ///     r#"{"email": "ada@example.com", "errors": {"name": ["is required"]}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(record.value("email").as_deref(), Some("ada@example.com"));
    /// assert_eq!(record.errors_on("name"), vec!["is required".to_string()]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let Value::Object(mut values) = serde_json::from_str::<Value>(json)? else {
            return Err(FormError::InvalidRecord(
                "expected a JSON object".to_string(),
            ));
        };

        let mut errors = ValidationErrors::new();
        match values.remove("errors") {
            None | Some(Value::Null) => {}
            Some(Value::Object(by_field)) => {
                for (field, messages) in by_field {
                    match messages {
                        Value::Array(items) => {
                            for item in items {
                                errors.add(&field, display_value(&item));
                            }
                        }
                        other => errors.add(&field, display_value(&other)),
                    }
                }
            }
            Some(_) => {
                return Err(FormError::InvalidRecord(
                    "`errors` must be an object".to_string(),
                ))
            }
        }

        Ok(Self { values, errors })
    }
}

impl FormObject for Record {
    fn value(&self, field: &str) -> Option<String> {
        match self.values.get(field)? {
            Value::Null => None,
            other => Some(display_value(other)),
        }
    }

    fn errors_on(&self, field: &str) -> Vec<String> {
        self.errors.errors_on(field)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_values() {
        let record = Record::new()
            .with_value("name", "Ada")
            .with_value("age", 36)
            .with_value("admin", true)
            .with_value("nickname", Value::Null);
        assert_eq!(record.value("name").as_deref(), Some("Ada"));
        assert_eq!(record.value("age").as_deref(), Some("36"));
        assert_eq!(record.value("admin").as_deref(), Some("true"));
        assert_eq!(record.value("nickname"), None);
        assert_eq!(record.value("missing"), None);
    }

    #[test]
    fn test_record_errors() {
        let record = Record::new().with_error("email", "is invalid");
        assert_eq!(record.errors_on("email"), vec!["is invalid".to_string()]);
        assert!(record.errors_on("name").is_empty());
    }

    #[test]
    fn test_from_json_single_message() {
        let record = Record::from_json(r#"{"errors": {"age": "is not a number"}}"#).unwrap();
        assert_eq!(record.errors_on("age"), vec!["is not a number".to_string()]);
        assert!(record.values.is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(matches!(
            Record::from_json("[1, 2]"),
            Err(FormError::InvalidRecord(_))
        ));
        assert!(matches!(
            Record::from_json(r#"{"errors": 3}"#),
            Err(FormError::InvalidRecord(_))
        ));
        assert!(matches!(
            Record::from_json("{"),
            Err(FormError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validation_errors_as_object() {
        let errors = ValidationErrors::new().with("name", "is required");
        assert_eq!(errors.value("name"), None);
        assert_eq!(errors.errors_on("name"), vec!["is required".to_string()]);
    }
}
