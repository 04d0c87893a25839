//! Test fixture utilities for creating schema dumps on disk.

use pathwise_schema::EntitySchema;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test fixture holding schema dump files in a temp directory.
pub struct SchemaDumpFixture {
    pub root: TempDir,
}

impl SchemaDumpFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a schema dump file into the fixture.
    ///
    /// # Arguments
    /// * `name` - The filename including extension
    /// * `json` - The dump content
    pub fn write_dump(&self, name: &str, json: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, json).expect("Failed to write dump file");
        path
    }

    /// Write the shared product catalog dump.
    pub fn write_catalog(&self) -> PathBuf {
        self.write_dump("catalog.json", catalog_dump())
    }
}

impl Default for SchemaDumpFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The product catalog dump shared across suggestion tests.
///
/// A deliberately lopsided graph: `product` carries every synthetic
/// trigger (translations, visibilities, price) plus a self-referencing
/// `parent`, `product_manufacturer` points back at `product` through a
/// to-many association, and the `visibilities` target entity is not
/// registered at all.
pub fn catalog_dump() -> &'static str {
    r#"{
        "product": {
            "entity": "product",
            "properties": {
                "id": { "type": "uuid" },
                "price": { "type": "json_object" },
                "parent": { "type": "association", "relation": "many_to_one", "entity": "product" },
                "cover": { "type": "association", "relation": "many_to_one", "entity": "product_media" },
                "name": { "type": "string" },
                "manufacturer": { "type": "association", "relation": "many_to_one", "entity": "product_manufacturer" },
                "translations": { "type": "association", "relation": "one_to_many", "entity": "product_translation" },
                "visibilities": { "type": "association", "relation": "one_to_many", "entity": "product_visibility" }
            }
        },
        "product_translation": {
            "entity": "product_translation",
            "properties": {
                "name": { "type": "string" }
            }
        },
        "product_manufacturer": {
            "entity": "product_manufacturer",
            "properties": {
                "id": { "type": "uuid" },
                "name": { "type": "string" },
                "media": { "type": "association", "relation": "many_to_one", "entity": "media" },
                "products": { "type": "association", "relation": "one_to_many", "entity": "product" }
            }
        },
        "product_media": {
            "entity": "product_media",
            "properties": {
                "id": { "type": "uuid" },
                "media": { "type": "association", "relation": "many_to_one", "entity": "media" }
            }
        },
        "media": {
            "entity": "media",
            "properties": {
                "id": { "type": "uuid" },
                "translations": { "type": "association", "relation": "one_to_many", "entity": "media_translation" }
            }
        },
        "media_translation": {
            "entity": "media_translation",
            "properties": {
                "title": { "type": "string" }
            }
        }
    }"#
}

/// Parsed form of [`catalog_dump`].
pub fn catalog_schema() -> EntitySchema {
    EntitySchema::from_json(catalog_dump()).expect("catalog dump should parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creation() {
        let fixture = SchemaDumpFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_write_catalog() {
        let fixture = SchemaDumpFixture::new();
        let path = fixture.write_catalog();
        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("product_manufacturer"));
    }

    #[test]
    fn test_catalog_schema_shape() {
        let schema = catalog_schema();
        assert_eq!(schema.len(), 6);
        assert!(schema.contains("product"));
        // the visibilities target is deliberately missing
        assert!(!schema.contains("product_visibility"));
    }
}
