//! JSON Schema validation of concerns documents.
//!
//! Validation is structural and collects every error rather than stopping
//! at the first. Callers get a [`ValidationReport`] and decide whether to
//! block or warn; nothing here is fatal.
//!
//! # Usage
//!
//! ```rust
//! use civic_core::schema::validate_concerns_data;
//! use serde_json::json;
//!
//! let report = validate_concerns_data(&json!({
//!     "concerns": [{"id": "economy", "title": "Economy"}]
//! })).unwrap();
//!
//! assert!(!report.is_valid());
//! assert_eq!(report.errors().len(), 3); // description, relevantOfficials, isActive
//! ```

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The embedded concerns document schema (JSON Schema draft-07).
pub const CONCERNS_SCHEMA: &str = include_str!("../schema/concerns.schema.json");

/// Fields every concern must carry.
pub const CONCERN_REQUIRED_FIELDS: [&str; 5] =
    ["id", "title", "description", "relevantOfficials", "isActive"];

/// Fields every news source must carry.
pub const NEWS_SOURCE_REQUIRED_FIELDS: [&str; 3] = ["name", "url", "logoUrl"];

// ============================================================================
// Report types
// ============================================================================

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaError {
    /// JSON pointer to the offending instance (`"$"` for the root).
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of validating a document: valid iff there are no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<SchemaError>,
}

impl ValidationReport {
    /// Returns `true` when no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every error found, in the order the validator reported them.
    pub fn errors(&self) -> &[SchemaError] {
        &self.errors
    }

    /// Consume the report and return its errors.
    pub fn into_errors(self) -> Vec<SchemaError> {
        self.errors
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Compiled validator for concerns documents.
///
/// Compile once and reuse when validating several documents.
#[derive(Debug)]
pub struct ConcernsValidator {
    validator: jsonschema::Validator,
}

impl ConcernsValidator {
    /// Compile the embedded schema.
    pub fn new() -> Result<Self> {
        let schema: Value = serde_json::from_str(CONCERNS_SCHEMA)?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| Error::schema(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Validate a document, collecting all errors.
    pub fn validate(&self, data: &Value) -> ValidationReport {
        let errors = self
            .validator
            .iter_errors(data)
            .map(|error| {
                let path = error.instance_path().to_string();
                SchemaError {
                    path: if path.is_empty() {
                        "$".to_string()
                    } else {
                        format!("${path}")
                    },
                    message: error.to_string(),
                }
            })
            .collect();
        ValidationReport { errors }
    }
}

/// Validate a concerns document against the embedded schema.
///
/// Returns `Err` only if the schema itself fails to compile.
pub fn validate_concerns_data(data: &Value) -> Result<ValidationReport> {
    let report = ConcernsValidator::new()?.validate(data);
    if !report.is_valid() {
        log::debug!("Concerns document has {} schema errors", report.errors().len());
    }
    Ok(report)
}

/// Quick presence check for a single concern object.
///
/// Only checks that each required key exists, not its type.
pub fn is_valid_concern(concern: &Value) -> bool {
    has_fields(concern, &CONCERN_REQUIRED_FIELDS)
}

/// Quick presence check for a single news source object.
pub fn is_valid_news_source(source: &Value) -> bool {
    has_fields(source, &NEWS_SOURCE_REQUIRED_FIELDS)
}

fn has_fields(value: &Value, fields: &[&str]) -> bool {
    match value.as_object() {
        Some(map) => fields.iter().all(|field| map.contains_key(*field)),
        None => false,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_document() -> Value {
        json!({
            "concerns": [{
                "id": "healthcare",
                "title": "Healthcare",
                "description": "Access and affordability",
                "relevantOfficials": ["jon-ossoff"],
                "isActive": true,
                "order": 1,
                "isRotating": false,
                "relatedLinks": [{"title": "Medicare", "url": "https://medicare.gov"}]
            }],
            "newsSources": [
                {"name": "Reuters", "url": "https://reuters.com", "logoUrl": "/logos/reuters.png"}
            ],
            "metadata": {"lastUpdated": "2025-10-10"}
        })
    }

    #[test]
    fn test_schema_compiles() {
        assert!(ConcernsValidator::new().is_ok());
    }

    #[test]
    fn test_valid_document() {
        let report = validate_concerns_data(&valid_document()).unwrap();
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors());
    }

    #[test]
    fn test_collects_all_errors() {
        let data = json!({
            "concerns": [
                {"id": "a", "title": "A"},
                {"title": "B", "description": "b", "relevantOfficials": [], "isActive": true}
            ],
            "newsSources": [{"name": "NoUrl"}]
        });
        let report = validate_concerns_data(&data).unwrap();
        // 3 missing on the first concern, 1 on the second, 2 on the news source
        assert_eq!(report.errors().len(), 6);
    }

    #[test]
    fn test_error_paths_point_at_instance() {
        let data = json!({"concerns": [{"id": "a", "title": "A", "description": "d",
                                        "relevantOfficials": [], "isActive": "yes"}]});
        let report = validate_concerns_data(&data).unwrap();
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].path, "$/concerns/0/isActive");
    }

    #[test]
    fn test_root_errors_use_dollar_path() {
        let report = validate_concerns_data(&json!({})).unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.errors()[0].path, "$");
    }

    #[test]
    fn test_validator_reuse() {
        let validator = ConcernsValidator::new().unwrap();
        assert!(validator.validate(&valid_document()).is_valid());
        assert!(!validator.validate(&json!([])).is_valid());
    }

    #[test]
    fn test_is_valid_concern() {
        let concern = &valid_document()["concerns"][0];
        assert!(is_valid_concern(concern));
        assert!(!is_valid_concern(&json!({"id": "x"})));
        assert!(!is_valid_concern(&Value::Null));
    }

    #[test]
    fn test_is_valid_news_source() {
        assert!(is_valid_news_source(&json!({"name": "a", "url": "b", "logoUrl": "c"})));
        assert!(!is_valid_news_source(&json!({"name": "a", "url": "b"})));
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError {
            path: "$/concerns/0".to_string(),
            message: "\"id\" is a required property".to_string(),
        };
        assert_eq!(err.to_string(), "$/concerns/0: \"id\" is a required property");
    }
}
