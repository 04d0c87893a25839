//! Typed-path tokenizing and schema descent.

use crate::schema::{EntityDefinition, EntitySchema};

/// Where descent through a typed path stopped.
///
/// Every segment before the cursor resolved through a to-one association;
/// the prefix carries those segments, dot-terminated when non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCursor<'a> {
    /// Definition of the entity reached.
    pub definition: &'a EntityDefinition,
    /// Dotted prefix of consumed segments, `""` or e.g. `"cover.media."`.
    pub prefix: String,
}

/// Splits a typed path into its completed leading segments.
///
/// The final segment is the partial text still being typed and is dropped:
/// `"media.id."` → `["media", "id"]`, `"parent.pr"` → `["parent"]`,
/// `""` → `[]`.
pub fn path_parts(typed: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = typed.split('.').collect();
    parts.pop();
    parts
}

/// Resolves a typed path against the schema.
///
/// Walks the completed segments from `root`, descending wherever a segment
/// names a to-one association with a registered target. Any other segment
/// (unknown property, scalar, to-many association, unregistered target)
/// stops the walk; the unresolved remainder is not an error, it lives on in
/// the caller's search text. Returns `None` only when the root entity is
/// not registered.
pub fn resolve<'a>(schema: &'a EntitySchema, root: &str, typed: &str) -> Option<PathCursor<'a>> {
    let mut definition = schema.get(root)?;
    let mut consumed: Vec<&str> = Vec::new();

    for part in path_parts(typed) {
        let Some(next) = walk_segment(schema, definition, part) else {
            break;
        };
        definition = next;
        consumed.push(part);
    }

    let mut prefix = consumed.join(".");
    if !prefix.is_empty() {
        prefix.push('.');
    }

    Some(PathCursor { definition, prefix })
}

/// Follows one path segment if it is a walkable association.
fn walk_segment<'a>(
    schema: &'a EntitySchema,
    definition: &EntityDefinition,
    segment: &str,
) -> Option<&'a EntityDefinition> {
    let property = definition.get(segment)?;
    let (relation, target) = property.as_association()?;
    if !relation.is_to_one() {
        return None;
    }
    schema.get(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Property, Relation};

    fn make_catalog_schema() -> EntitySchema {
        let mut schema = EntitySchema::new();
        schema.insert(
            EntityDefinition::builder("product")
                .property("id", Property::Uuid)
                .property("price", Property::JsonObject)
                .association("parent", Relation::ManyToOne, "product")
                .association("cover", Relation::ManyToOne, "product_media")
                .property("name", Property::String)
                .association("translations", Relation::OneToMany, "product_translation")
                .build(),
        );
        schema.insert(
            EntityDefinition::builder("product_media")
                .property("id", Property::Uuid)
                .association("media", Relation::ManyToOne, "media")
                .build(),
        );
        schema.insert(
            EntityDefinition::builder("media")
                .property("id", Property::Uuid)
                .build(),
        );
        schema.insert(
            EntityDefinition::builder("product_translation")
                .property("name", Property::String)
                .build(),
        );
        schema
    }

    #[test]
    fn test_path_parts_drops_trailing_segment() {
        let cases = vec![
            ("", vec![]),
            ("media.id.", vec!["media", "id"]),
            ("parent.pr", vec!["parent"]),
            ("parent.parent.translations.name", vec!["parent", "parent", "translations"]),
            (".", vec![""]),
        ];

        for (typed, expected) in cases {
            assert_eq!(path_parts(typed), expected, "typed path: '{}'", typed);
        }
    }

    #[test]
    fn test_resolve_empty_path_stays_at_root() {
        let schema = make_catalog_schema();
        let cursor = resolve(&schema, "product", "").unwrap();

        assert_eq!(cursor.definition.entity, "product");
        assert_eq!(cursor.prefix, "");
    }

    #[test]
    fn test_resolve_descends_to_one_chain() {
        let schema = make_catalog_schema();
        let cursor = resolve(&schema, "product", "cover.media.").unwrap();

        assert_eq!(cursor.definition.entity, "media");
        assert_eq!(cursor.prefix, "cover.media.");
    }

    #[test]
    fn test_resolve_self_reference() {
        let schema = make_catalog_schema();
        let cursor = resolve(&schema, "product", "parent.parent.").unwrap();

        assert_eq!(cursor.definition.entity, "product");
        assert_eq!(cursor.prefix, "parent.parent.");
    }

    #[test]
    fn test_resolve_stops_at_scalar() {
        let schema = make_catalog_schema();
        let cursor = resolve(&schema, "product", "cover.id.").unwrap();

        // `id` is a scalar; descent stops after `cover`.
        assert_eq!(cursor.definition.entity, "product_media");
        assert_eq!(cursor.prefix, "cover.");
    }

    #[test]
    fn test_resolve_stops_at_to_many() {
        let schema = make_catalog_schema();
        let cursor = resolve(&schema, "product", "parent.parent.translations.name").unwrap();

        // one_to_many associations are terminal suggestions, never walked.
        assert_eq!(cursor.definition.entity, "product");
        assert_eq!(cursor.prefix, "parent.parent.");
    }

    #[test]
    fn test_resolve_stops_at_unknown_segment() {
        let schema = make_catalog_schema();
        let cursor = resolve(&schema, "product", "media.id.").unwrap();

        // `media` is not a product property; the whole remainder is filter text.
        assert_eq!(cursor.definition.entity, "product");
        assert_eq!(cursor.prefix, "");
    }

    #[test]
    fn test_resolve_stops_at_unregistered_target() {
        let mut schema = make_catalog_schema();
        schema.insert(
            EntityDefinition::builder("order")
                .association("billing_address", Relation::OneToOne, "address")
                .build(),
        );

        let cursor = resolve(&schema, "order", "billing_address.street.").unwrap();
        assert_eq!(cursor.definition.entity, "order");
        assert_eq!(cursor.prefix, "");
    }

    #[test]
    fn test_resolve_unknown_root() {
        let schema = make_catalog_schema();
        assert!(resolve(&schema, "customer", "").is_none());
    }
}
