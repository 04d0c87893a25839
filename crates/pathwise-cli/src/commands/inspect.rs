//! Inspect command implementation
//!
//! Prints the canonical fingerprint of a schema dump plus a structural
//! summary, either for every entity or for a single one in detail.

use anyhow::{Context, Result};
use colored::Colorize;
use pathwise_schema::{
    canonical_schema_hash, EntityDefinition, EntitySchema, Property, PRICE_FIELDS, PRICE_PROPERTY,
    TRANSLATIONS_PROPERTY, VISIBILITIES_PROPERTY, VISIBILITY_FIELDS,
};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    input_error_to_json, EntityDetail, EntitySummary, InspectOutput, InspectResult, JsonError,
    PropertySummary,
};
use crate::input::{load_schema, LoadResult};

/// Run the inspect command
///
/// # Arguments
/// * `schema_path` - Path to the schema dump (JSON)
/// * `entity` - Entity to show in detail; `None` lists all entities
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 on load failure or unknown entity
pub fn run(schema_path: &str, entity: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(schema_path, entity)
    } else {
        run_human(schema_path, entity)
    }
}

/// Run inspect with human-readable (colored) output
fn run_human(schema_path: &str, entity: Option<&str>) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), schema_path);

    let LoadResult {
        schema,
        source_hash,
        entity_count,
    } = load_schema(Path::new(schema_path))
        .with_context(|| format!("Failed to load schema file: {}", schema_path))?;

    println!(
        "{} {} entities ({})",
        "Source:".dimmed(),
        entity_count,
        &source_hash[..16]
    );

    let schema_hash = canonical_schema_hash(&schema).unwrap_or_else(|_| "unknown".to_string());
    println!("{} {}", "Fingerprint:".dimmed(), schema_hash);

    match entity {
        Some(name) => {
            let definition = schema.get(name).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown entity '{}' (schema defines {} entities)",
                    name,
                    entity_count
                )
            })?;
            print_entity_detail(&schema, definition);
        }
        None => print_entity_listing(&schema),
    }

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(schema_path: &str, entity: Option<&str>) -> Result<ExitCode> {
    let load_result = load_schema(Path::new(schema_path));

    let LoadResult {
        schema,
        source_hash,
        entity_count,
    } = match load_result {
        Ok(r) => r,
        Err(e) => {
            let error = input_error_to_json(&e, Some(schema_path));
            let output = InspectOutput::failure(vec![error], None);
            print_json(&output);
            return Ok(ExitCode::from(1));
        }
    };

    let result = match entity {
        Some(name) => match schema.get(name) {
            Some(definition) => InspectResult {
                entity_count,
                entities: Vec::new(),
                detail: Some(entity_detail(&schema, definition)),
            },
            None => {
                let error = JsonError::new(
                    super::json_output::error_codes::UNKNOWN_ENTITY,
                    format!(
                        "Unknown entity '{}' (schema defines {} entities)",
                        name, entity_count
                    ),
                )
                .with_file(schema_path);
                let output = InspectOutput::failure(vec![error], Some(source_hash));
                print_json(&output);
                return Ok(ExitCode::from(1));
            }
        },
        None => InspectResult {
            entity_count,
            entities: schema
                .iter()
                .map(|(_, definition)| entity_summary(definition))
                .collect(),
            detail: None,
        },
    };

    let schema_hash = canonical_schema_hash(&schema).unwrap_or_else(|_| "unknown".to_string());
    let output = InspectOutput::success(result, schema_hash, source_hash);
    print_json(&output);

    Ok(ExitCode::SUCCESS)
}

/// Build a one-line summary for an entity.
fn entity_summary(definition: &EntityDefinition) -> EntitySummary {
    EntitySummary {
        entity: definition.entity.clone(),
        properties: definition.property_count(),
        associations: definition.association_targets().count(),
    }
}

/// Build the full detail record for an entity.
fn entity_detail(schema: &EntitySchema, definition: &EntityDefinition) -> EntityDetail {
    let properties = definition
        .properties
        .iter()
        .map(|(name, property)| {
            let (relation, target) = match property.as_association() {
                Some((relation, entity)) => {
                    (Some(relation.to_string()), Some(entity.to_string()))
                }
                None => (None, None),
            };
            PropertySummary {
                name: name.clone(),
                kind: property.kind_str().to_string(),
                relation,
                target,
            }
        })
        .collect();

    EntityDetail {
        entity: definition.entity.clone(),
        properties,
        expansions: applicable_expansions(schema, definition),
    }
}

/// Which synthetic expansions fire at this entity, in pass order.
fn applicable_expansions(schema: &EntitySchema, definition: &EntityDefinition) -> Vec<String> {
    let mut expansions = Vec::new();

    let translation_target = definition
        .get(TRANSLATIONS_PROPERTY)
        .and_then(Property::as_association)
        .map(|(_, target)| target);
    if translation_target.is_some_and(|target| schema.contains(target)) {
        expansions.push(TRANSLATIONS_PROPERTY.to_string());
    }

    if definition.get(VISIBILITIES_PROPERTY).is_some() {
        expansions.push(VISIBILITIES_PROPERTY.to_string());
    }

    if definition.get(PRICE_PROPERTY) == Some(&Property::JsonObject) {
        expansions.push(PRICE_PROPERTY.to_string());
    }

    expansions
}

/// Print the all-entities listing.
fn print_entity_listing(schema: &EntitySchema) {
    println!("\n{}", "Entities:".cyan().bold());
    for (name, definition) in schema.iter() {
        let associations = definition.association_targets().count();
        let note = if associations > 0 {
            format!(
                "{} properties, {} association(s)",
                definition.property_count(),
                associations
            )
        } else {
            format!("{} properties", definition.property_count())
        };
        println!("  {:<28} {}", name, note.dimmed());
    }
}

/// Print the single-entity detail view.
fn print_entity_detail(schema: &EntitySchema, definition: &EntityDefinition) {
    println!(
        "\n{} ({} properties)",
        definition.entity.cyan().bold(),
        definition.property_count()
    );
    for (name, property) in &definition.properties {
        match property.as_association() {
            Some((relation, target)) => println!(
                "  {:<20} {} {}",
                name,
                property.kind_str(),
                format!("{} -> {}", relation, target).dimmed()
            ),
            None => println!("  {:<20} {}", name, property.kind_str()),
        }
    }

    let expansions = applicable_expansions(schema, definition);
    if expansions.is_empty() {
        return;
    }

    println!("\n{}", "Expansions:".cyan().bold());
    for expansion in &expansions {
        match expansion.as_str() {
            TRANSLATIONS_PROPERTY => {
                let target = definition
                    .get(TRANSLATIONS_PROPERTY)
                    .and_then(Property::as_association)
                    .map(|(_, entity)| entity)
                    .unwrap_or("?");
                println!("  translations -> {} {}", target, "(per language)".dimmed());
            }
            VISIBILITIES_PROPERTY => {
                println!(
                    "  visibilities {}",
                    format!("({})", VISIBILITY_FIELDS.join(", ")).dimmed()
                );
            }
            PRICE_PROPERTY => {
                println!(
                    "  price {}",
                    format!("(per currency: {})", PRICE_FIELDS.join(", ")).dimmed()
                );
            }
            _ => {}
        }
    }
}

fn print_json(output: &InspectOutput) {
    let json = serde_json::to_string_pretty(output)
        .expect("InspectOutput serialization should not fail");
    println!("{}", json);
}
