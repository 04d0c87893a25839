//! Canonical hashing for schema snapshots.
//!
//! Mapping profiles record which schema they were built against, so equal
//! schemas must hash equally regardless of file formatting:
//! - Schema canonicalization using RFC 8785 (JCS)
//! - BLAKE3 for the digest

use crate::error::SchemaError;
use crate::schema::EntitySchema;

/// Computes the canonical BLAKE3 hash of a schema.
///
/// The hash is computed as:
/// ```text
/// schema_hash = hex(BLAKE3(JCS(schema_json)))
/// ```
///
/// Where JCS is JSON Canonicalization Scheme per RFC 8785.
///
/// # Arguments
/// * `schema` - The schema to hash
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use pathwise_schema::{EntityDefinition, EntitySchema, Property};
/// use pathwise_schema::hash::canonical_schema_hash;
///
/// let mut schema = EntitySchema::new();
/// schema.insert(
///     EntityDefinition::builder("product")
///         .property("id", Property::Uuid)
///         .build(),
/// );
///
/// let hash = canonical_schema_hash(&schema).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_schema_hash(schema: &EntitySchema) -> Result<String, SchemaError> {
    let value = schema.to_value()?;
    canonical_value_hash(&value)
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> Result<String, SchemaError> {
    let canonical = canonicalize_json(value)?;
    Ok(blake3_hash_str(&canonical))
}

/// Canonicalizes a JSON value according to RFC 8785 (JCS).
///
/// Object keys are sorted lexicographically, no whitespace between tokens,
/// strings use minimal escaping.
pub fn canonicalize_json(value: &serde_json::Value) -> Result<String, SchemaError> {
    let mut out = String::new();
    write_canonical(value, &mut out);
    Ok(out)
}

fn write_canonical(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Null => out.push_str("null"),
        serde_json::Value::Bool(true) => out.push_str("true"),
        serde_json::Value::Bool(false) => out.push_str("false"),
        serde_json::Value::Number(n) => write_number(n, out),
        serde_json::Value::String(s) => write_string(s, out),
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_canonical(&map[key.as_str()], out);
            }
            out.push('}');
        }
    }
}

/// Writes a number with JCS formatting.
fn write_number(n: &serde_json::Number, out: &mut String) {
    if let Some(i) = n.as_i64() {
        out.push_str(&i.to_string());
        return;
    }
    if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
        return;
    }
    match n.as_f64() {
        // JCS maps non-finite numbers to null.
        Some(f) if f.is_nan() || f.is_infinite() => out.push_str("null"),
        Some(f) if f == 0.0 => out.push('0'),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => out.push_str(&(f as i64).to_string()),
        Some(f) => {
            let s = f.to_string();
            if s.contains('.') && !s.contains('e') && !s.contains('E') {
                out.push_str(s.trim_end_matches('0').trim_end_matches('.'));
            } else {
                out.push_str(&s);
            }
        }
        None => out.push_str("null"),
    }
}

/// Writes a string with minimal JCS escaping.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Computes a BLAKE3 hash of arbitrary data as a 64-character hex string.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Computes a BLAKE3 hash of a string as a 64-character hex string.
pub fn blake3_hash_str(s: &str) -> String {
    blake3_hash(s.as_bytes())
}
