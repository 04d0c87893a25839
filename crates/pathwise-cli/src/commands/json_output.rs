//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `suggest`, `validate`, and `inspect`. These types let editor integrations
//! and other tools parse CLI output programmatically.

use pathwise_schema::PathOption;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors, or passes through validation error codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Entity not defined in the schema
    pub const UNKNOWN_ENTITY: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Schema path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the schema path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Schema path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the schema path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// JSON output for the `suggest` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestOutput {
    /// Whether the suggestion run succeeded
    pub success: bool,
    /// Errors encountered during loading or resolution
    pub errors: Vec<JsonError>,
    /// Suggestion result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SuggestResult>,
    /// Canonical schema hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Suggestion result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResult {
    /// Root entity the expansion started from
    pub entity: String,
    /// Typed path as given
    pub path: String,
    /// Search term as given
    pub term: String,
    /// Total number of matching options before any limit
    pub total: usize,
    /// Whether the option list was truncated by --limit
    pub truncated: bool,
    /// The visible options, filtered and ordered
    pub options: Vec<PathOption>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SuggestOutput {
    /// Creates a successful suggest output.
    pub fn success(result: SuggestResult, schema_hash: String, source_hash: String) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
            schema_hash: Some(schema_hash),
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed suggest output.
    pub fn failure(errors: Vec<JsonError>, source_hash: Option<String>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
            schema_hash: None,
            source_hash,
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Validation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidateResult>,
    /// Canonical schema hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Validation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Number of entities in the schema
    pub entity_count: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ValidateOutput {
    /// Creates a successful validate output.
    pub fn success(
        result: ValidateResult,
        schema_hash: String,
        source_hash: String,
        warnings: Vec<JsonWarning>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            schema_hash: Some(schema_hash),
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed validate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        schema_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            schema_hash,
            source_hash,
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether inspection succeeded
    pub success: bool,
    /// Errors encountered during loading
    pub errors: Vec<JsonError>,
    /// Inspection result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
    /// Canonical schema hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Inspection result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectResult {
    /// Number of entities in the schema
    pub entity_count: usize,
    /// One summary line per entity (empty when a single entity was requested)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub entities: Vec<EntitySummary>,
    /// Detail for the requested entity (when --entity was given)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<EntityDetail>,
}

/// Summary row for one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySummary {
    /// Entity name
    pub entity: String,
    /// Number of declared properties
    pub properties: usize,
    /// Number of association properties
    pub associations: usize,
}

/// Full detail for one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDetail {
    /// Entity name
    pub entity: String,
    /// Declared properties in schema order
    pub properties: Vec<PropertySummary>,
    /// Synthetic expansions that apply at this entity
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub expansions: Vec<String>,
}

/// Summary of a single property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySummary {
    /// Property name
    pub name: String,
    /// Property kind tag (uuid, string, association, ...)
    pub kind: String,
    /// Relation cardinality (associations only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    /// Target entity (associations only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: InspectResult, schema_hash: String, source_hash: String) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
            schema_hash: Some(schema_hash),
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>, source_hash: Option<String>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
            schema_hash: None,
            source_hash,
        }
    }
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &crate::input::InputError, file: Option<&str>) -> JsonError {
    use crate::input::InputError;

    let (code, message) = match err {
        InputError::FileRead { path, source } => (
            error_codes::FILE_READ,
            format!("Failed to read file '{}': {}", path.display(), source),
        ),
        InputError::UnknownExtension { extension } => (
            error_codes::UNKNOWN_EXTENSION,
            match extension {
                Some(ext) => format!("Unknown file extension '.{}' (expected .json)", ext),
                None => "File has no extension (expected .json)".to_string(),
            },
        ),
        InputError::JsonParse { message } => (
            error_codes::JSON_PARSE,
            format!("JSON parse error: {}", message),
        ),
    };

    let mut error = JsonError::new(code, message);
    if let Some(f) = file {
        error = error.with_file(f);
    }
    error
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &pathwise_schema::ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &pathwise_schema::ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("E006", "test error")
            .with_path("product.cover")
            .with_file("catalog.json");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"E006\""));
        assert!(json.contains("\"message\":\"test error\""));
        assert!(json.contains("\"path\":\"product.cover\""));
        assert!(json.contains("\"file\":\"catalog.json\""));
    }

    #[test]
    fn test_json_error_optional_fields_skipped() {
        let error = JsonError::new("E001", "test error");
        let json = serde_json::to_string(&error).unwrap();

        assert!(!json.contains("\"path\""));
        assert!(!json.contains("\"file\""));
    }

    #[test]
    fn test_suggest_output_success() {
        let result = SuggestResult {
            entity: "product".to_string(),
            path: "cover.media.".to_string(),
            term: String::new(),
            total: 2,
            truncated: false,
            options: vec![PathOption::new("cover.media.id")],
            duration_ms: 3,
        };

        let output =
            SuggestOutput::success(result, "schemahash".to_string(), "sourcehash".to_string());

        let json = serde_json::to_string_pretty(&output).unwrap();
        // Pretty-printed JSON uses `: ` (colon followed by space)
        assert!(json.contains("\"success\": true"));
        assert!(json.contains("\"value\": \"cover.media.id\""));
        assert!(json.contains("\"schema_hash\": \"schemahash\""));
    }

    #[test]
    fn test_suggest_output_failure() {
        let errors = vec![JsonError::new("CLI_004", "unknown entity")];
        let output = SuggestOutput::failure(errors, None);

        assert!(!output.success);
        assert_eq!(output.errors.len(), 1);
        assert!(output.result.is_none());
        assert!(output.schema_hash.is_none());
    }

    #[test]
    fn test_validate_output_serialization() {
        let result = ValidateResult {
            entity_count: 5,
            duration_ms: 12,
        };

        let output = ValidateOutput::success(
            result,
            "schemahash".to_string(),
            "sourcehash".to_string(),
            vec![JsonWarning::new("W001", "translations is not to-many")],
        );

        let json = serde_json::to_string_pretty(&output).unwrap();
        assert!(json.contains("\"success\": true"));
        assert!(json.contains("\"entity_count\": 5"));
        assert!(json.contains("\"code\": \"W001\""));
    }

    #[test]
    fn test_inspect_result_detail_round_trip() {
        let result = InspectResult {
            entity_count: 1,
            entities: vec![],
            detail: Some(EntityDetail {
                entity: "product".to_string(),
                properties: vec![PropertySummary {
                    name: "cover".to_string(),
                    kind: "association".to_string(),
                    relation: Some("many_to_one".to_string()),
                    target: Some("product_media".to_string()),
                }],
                expansions: vec!["price".to_string()],
            }),
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: InspectResult = serde_json::from_str(&json).unwrap();
        assert!(back.entities.is_empty());
        assert_eq!(back.detail.unwrap().properties[0].name, "cover");
    }
}
