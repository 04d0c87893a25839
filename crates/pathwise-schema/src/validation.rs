//! Schema validation logic.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::expand::{PRICE_PROPERTY, TRANSLATIONS_PROPERTY};
use crate::property::Property;
use crate::schema::{EntityDefinition, EntitySchema};

/// Regex pattern for valid entity names.
/// Format: starts with a lowercase letter, followed by lowercase letters,
/// digits, or underscores.
const ENTITY_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

static ENTITY_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn entity_name_regex() -> &'static Regex {
    ENTITY_NAME_REGEX.get_or_init(|| Regex::new(ENTITY_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Validates a schema and returns a validation result.
///
/// Expansion never requires a valid schema (broken references simply stop
/// path descent); validation exists so schema dumps can be checked before
/// they are shipped to mapping tools.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// * `ValidationResult` with `ok=true` if validation passed, with any warnings.
/// * `ValidationResult` with `ok=false` and errors if validation failed.
///
/// # Example
/// ```
/// use pathwise_schema::{EntityDefinition, EntitySchema, Property};
/// use pathwise_schema::validation::validate_schema;
///
/// let mut schema = EntitySchema::new();
/// schema.insert(
///     EntityDefinition::builder("product")
///         .property("id", Property::Uuid)
///         .build(),
/// );
///
/// let result = validate_schema(&schema);
/// assert!(result.is_ok());
/// ```
pub fn validate_schema(schema: &EntitySchema) -> ValidationResult {
    let mut result = ValidationResult::default();

    if schema.is_empty() {
        result.add_error(ValidationError::new(
            ErrorCode::EmptySchema,
            "schema has no entities",
        ));
        return result;
    }

    for (name, definition) in schema.iter() {
        validate_entity_name(name, definition, &mut result);
        validate_associations(schema, name, definition, &mut result);
        check_expansion_warnings(name, definition, &mut result);
    }

    result
}

/// Validates an entity's name and its agreement with the definition.
fn validate_entity_name(name: &str, definition: &EntityDefinition, result: &mut ValidationResult) {
    if name.is_empty() {
        result.add_error(ValidationError::new(
            ErrorCode::EmptyEntityName,
            "entity name must not be empty",
        ));
        return;
    }

    if !entity_name_regex().is_match(name) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidEntityName,
            format!(
                "entity name must match pattern '{}', got '{}'",
                ENTITY_NAME_PATTERN, name
            ),
            name,
        ));
    }

    if definition.entity != name {
        result.add_error(ValidationError::with_path(
            ErrorCode::EntityNameMismatch,
            format!(
                "definition declares entity '{}' under schema key '{}'",
                definition.entity, name
            ),
            format!("{}.entity", name),
        ));
    }
}

/// Validates that every association points at a registered entity.
fn validate_associations(
    schema: &EntitySchema,
    name: &str,
    definition: &EntityDefinition,
    result: &mut ValidationResult,
) {
    for (prop_name, property) in &definition.properties {
        let Some((_, target)) = property.as_association() else {
            continue;
        };

        if target.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyAssociationTarget,
                "association target entity must not be empty",
                format!("{}.properties.{}", name, prop_name),
            ));
        } else if !schema.contains(target) {
            result.add_error(ValidationError::with_path(
                ErrorCode::UnknownAssociationTarget,
                format!("references unregistered entity '{}'", target),
                format!("{}.properties.{}", name, prop_name),
            ));
        }
    }
}

/// Warns about properties whose shape will not expand the way their name
/// suggests.
fn check_expansion_warnings(
    name: &str,
    definition: &EntityDefinition,
    result: &mut ValidationResult,
) {
    if let Some(property) = definition.get(TRANSLATIONS_PROPERTY) {
        let to_many = matches!(
            property.as_association(),
            Some((relation, _)) if !relation.is_to_one()
        );
        if !to_many {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::TranslationsNotToMany,
                "translations is not a to-many association; it will not expand per language",
                format!("{}.properties.{}", name, TRANSLATIONS_PROPERTY),
            ));
        }
    }

    if let Some(property) = definition.get(PRICE_PROPERTY) {
        if *property != Property::JsonObject {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::PriceNotJsonObject,
                "price is not a json_object field; it will not expand per currency",
                format!("{}.properties.{}", name, PRICE_PROPERTY),
            ));
        }
    }
}
