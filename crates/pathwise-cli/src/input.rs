//! Input abstraction for loading schema dumps from disk.
//!
//! Registry dumps arrive as JSON files. This module dispatches by file
//! extension and returns a consistent result type with source provenance
//! information for reports and machine-readable output.

use pathwise_schema::EntitySchema;
use std::path::{Path, PathBuf};

/// Recognized schema dump extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Result of loading a schema dump.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed entity schema.
    pub schema: EntitySchema,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
    /// Number of entities defined in the dump.
    pub entity_count: usize,
}

/// Errors that can occur during schema loading.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load a schema dump from a file path, dispatching by extension.
///
/// # Arguments
/// * `path` - Path to the schema dump (.json)
///
/// # Returns
/// * `Ok(LoadResult)` - Successfully loaded and parsed schema
/// * `Err(InputError)` - File read or parse error
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use pathwise_cli::input::load_schema;
///
/// let result = load_schema(Path::new("catalog.json")).unwrap();
/// println!("Loaded {} entities", result.entity_count);
/// ```
pub fn load_schema(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => load_json_schema(path),
        _ => Err(InputError::UnknownExtension { extension }),
    }
}

/// Load a schema dump from a JSON file.
fn load_json_schema(path: &Path) -> Result<LoadResult, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Hash the raw bytes, not the parsed form, so provenance survives
    // reformatting-insensitive parse
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let schema = EntitySchema::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    let entity_count = schema.len();

    Ok(LoadResult {
        schema,
        source_hash,
        entity_count,
    })
}
