//! Entity schema and definition types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::property::{Property, Relation};

/// Definition of a single entity: its name plus an ordered property map.
///
/// Property order is the declaration order of the source schema; suggestion
/// output depends on it, so the map must never be re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDefinition {
    /// Entity name, repeated inside the definition the way registries dump it.
    pub entity: String,

    /// Properties keyed by name, in declaration order.
    pub properties: IndexMap<String, Property>,
}

impl EntityDefinition {
    /// Creates a new entity definition builder.
    pub fn builder(entity: impl Into<String>) -> EntityDefinitionBuilder {
        EntityDefinitionBuilder::new(entity)
    }

    /// Looks up a property by name.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Returns property names in declaration order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|k| k.as_str())
    }

    /// Returns the number of properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Returns the target entity names of all association properties.
    pub fn association_targets(&self) -> impl Iterator<Item = &str> {
        self.properties
            .values()
            .filter_map(|p| p.as_association().map(|(_, entity)| entity))
    }
}

/// Builder for constructing EntityDefinition instances.
#[derive(Debug, Clone)]
pub struct EntityDefinitionBuilder {
    entity: String,
    properties: IndexMap<String, Property>,
}

impl EntityDefinitionBuilder {
    /// Creates a new entity definition builder.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            properties: IndexMap::new(),
        }
    }

    /// Adds a property.
    pub fn property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    /// Adds an association property.
    pub fn association(
        self,
        name: impl Into<String>,
        relation: Relation,
        entity: impl Into<String>,
    ) -> Self {
        self.property(name, Property::association(relation, entity))
    }

    /// Builds the definition.
    pub fn build(self) -> EntityDefinition {
        EntityDefinition {
            entity: self.entity,
            properties: self.properties,
        }
    }
}

/// A full entity schema: ordered map from entity name to definition.
///
/// This is an explicit immutable snapshot passed by reference into the
/// expansion functions; there is no global registry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntitySchema {
    entities: IndexMap<String, EntityDefinition>,
}

impl EntitySchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a definition, keyed by its entity name.
    pub fn insert(&mut self, definition: EntityDefinition) {
        self.entities.insert(definition.entity.clone(), definition);
    }

    /// Looks up an entity definition by name.
    pub fn get(&self, entity: &str) -> Option<&EntityDefinition> {
        self.entities.get(entity)
    }

    /// Checks if an entity is registered.
    pub fn contains(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    /// Returns entity names in declaration order.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(|k| k.as_str())
    }

    /// Iterates over (name, definition) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityDefinition)> {
        self.entities.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Checks if the schema has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Parses a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses a schema from a JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Serializes the schema to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the schema to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the schema to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl FromIterator<EntityDefinition> for EntitySchema {
    fn from_iter<I: IntoIterator<Item = EntityDefinition>>(iter: I) -> Self {
        let mut schema = EntitySchema::new();
        for definition in iter {
            schema.insert(definition);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media_definition() -> EntityDefinition {
        EntityDefinition::builder("media")
            .property("id", Property::Uuid)
            .association("translations", Relation::OneToMany, "media_translation")
            .build()
    }

    #[test]
    fn test_definition_builder_preserves_order() {
        let definition = EntityDefinition::builder("product")
            .property("id", Property::Uuid)
            .property("price", Property::JsonObject)
            .property("name", Property::String)
            .association("cover", Relation::ManyToOne, "product_media")
            .build();

        let names: Vec<&str> = definition.property_names().collect();
        assert_eq!(names, vec!["id", "price", "name", "cover"]);
        assert_eq!(definition.property_count(), 4);
    }

    #[test]
    fn test_definition_association_targets() {
        let definition = media_definition();
        let targets: Vec<&str> = definition.association_targets().collect();
        assert_eq!(targets, vec!["media_translation"]);
    }

    #[test]
    fn test_schema_insert_and_get() {
        let mut schema = EntitySchema::new();
        schema.insert(media_definition());

        assert!(schema.contains("media"));
        assert!(!schema.contains("product"));
        assert_eq!(schema.len(), 1);

        let definition = schema.get("media").unwrap();
        assert_eq!(definition.entity, "media");
        assert!(definition.get("id").is_some());
        assert!(definition.get("missing").is_none());
    }

    #[test]
    fn test_schema_from_json_preserves_property_order() {
        let json = r#"{
            "product": {
                "entity": "product",
                "properties": {
                    "id": { "type": "uuid" },
                    "price": { "type": "json_object", "properties": [] },
                    "parent": { "type": "association", "relation": "many_to_one", "entity": "product" },
                    "name": { "type": "string" }
                }
            }
        }"#;

        let schema = EntitySchema::from_json(json).unwrap();
        let definition = schema.get("product").unwrap();

        let names: Vec<&str> = definition.property_names().collect();
        assert_eq!(names, vec!["id", "price", "parent", "name"]);
        assert_eq!(
            definition.get("parent").unwrap().as_association(),
            Some((Relation::ManyToOne, "product"))
        );
    }

    #[test]
    fn test_schema_json_round_trip() {
        let schema: EntitySchema = [media_definition()].into_iter().collect();

        let json = schema.to_json().unwrap();
        let parsed = EntitySchema::from_json(&json).unwrap();
        assert_eq!(schema, parsed);
    }

    #[test]
    fn test_schema_invalid_json() {
        assert!(EntitySchema::from_json("{ not json }").is_err());
        // A definition must carry its property map.
        assert!(EntitySchema::from_json(r#"{ "product": { "entity": "product" } }"#).is_err());
    }
}
