use super::ports::{Collection, Document};
use crate::error::{Result, ServiceError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A record type stored in one collection of the document store.
///
/// The model owns its schema: `validate_draft` runs on create and enforces
/// required paths and defaults, `validate_changes` runs on update and only
/// casts the fields that are present.
pub trait Model: DeserializeOwned + Send + Sync + 'static {
    const NAME: &'static str;
    const COLLECTION: Collection;

    type Draft: Send;
    type Changes: Send;

    fn validate_draft(draft: Self::Draft) -> Result<Document>;

    fn validate_changes(changes: Self::Changes) -> Result<Document>;
}

/// Serializes a value that must become a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(ServiceError::Internal(format!(
            "expected a JSON object, found {other}"
        ))),
    }
}

/// Collects every schema violation of one payload so they are reported
/// together, e.g. ``Customer validation failed: email: Path `email` is required.``
#[derive(Debug)]
pub struct SchemaErrors {
    model: &'static str,
    violations: Vec<String>,
}

impl SchemaErrors {
    pub fn new(model: &'static str) -> Self {
        Self {
            model,
            violations: Vec::new(),
        }
    }

    /// Records a violation when a required path is absent.
    pub fn require<T>(&mut self, path: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.violations
                .push(format!("{path}: Path `{path}` is required."));
        }
        value
    }

    /// Like `require`, but an empty string also counts as missing.
    pub fn require_text(&mut self, path: &str, value: Option<String>) -> Option<String> {
        let value = value.filter(|text| !text.is_empty());
        self.require(path, value)
    }

    pub fn reject(&mut self, path: &str, error: impl std::fmt::Display) {
        self.violations.push(format!("{path}: {error}"));
    }

    pub fn finish(self) -> Result<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(format!(
                "{} validation failed: {}",
                self.model,
                self.violations.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_errors_join_every_violation() {
        let mut errors = SchemaErrors::new("Customer");
        assert_eq!(errors.require("name", Some("A")), Some("A"));
        assert!(errors.require::<String>("email", None).is_none());
        assert!(errors.require::<String>("address", None).is_none());

        let err = errors.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Customer validation failed: email: Path `email` is required., address: Path `address` is required."
        );
    }

    #[test]
    fn test_empty_text_is_missing() {
        let mut errors = SchemaErrors::new("Customer");
        assert!(errors.require_text("name", Some(String::new())).is_none());
        assert_eq!(
            errors.require_text("email", Some("a@x.com".to_string())).as_deref(),
            Some("a@x.com")
        );

        let err = errors.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Customer validation failed: name: Path `name` is required."
        );
    }

    #[test]
    fn test_to_document_rejects_non_objects() {
        assert!(to_document(&vec![1, 2]).is_err());
        assert!(to_document(&serde_json::json!({"a": 1})).is_ok());
    }
}
