//! Suggest command implementation
//!
//! Expands a typed path against a schema dump and prints the visible options.

use anyhow::{Context, Result};
use colored::Colorize;
use pathwise_schema::suggest::visible_results;
use pathwise_schema::{canonical_schema_hash, ExpandContext, PathOption};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{input_error_to_json, JsonError, SuggestOutput, SuggestResult};
use crate::input::{load_schema, LoadResult};

/// Run the suggest command
///
/// # Arguments
/// * `schema_path` - Path to the schema dump (JSON)
/// * `entity` - Root entity to expand from
/// * `typed` - Typed path, completed segments ending with '.'
/// * `term` - Case-sensitive search term filtering option values
/// * `currencies` - Currency ISO codes for price expansion
/// * `languages` - Locale codes for translation expansion
/// * `limit` - Maximum number of options to emit (applied after ordering)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 on load or resolution failure
#[allow(clippy::too_many_arguments)]
pub fn run(
    schema_path: &str,
    entity: &str,
    typed: &str,
    term: &str,
    currencies: &[String],
    languages: &[String],
    limit: Option<usize>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(schema_path, entity, typed, term, currencies, languages, limit)
    } else {
        run_human(schema_path, entity, typed, term, currencies, languages, limit)
    }
}

/// Run suggest with human-readable (colored) output
fn run_human(
    schema_path: &str,
    entity: &str,
    typed: &str,
    term: &str,
    currencies: &[String],
    languages: &[String],
    limit: Option<usize>,
) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {} at '{}'", "Expanding:".cyan().bold(), entity, typed);

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
    if !term.is_empty() {
        println!("{} {}", "Filter:".dimmed(), term);
    }

    if schema.get(entity).is_none() {
        anyhow::bail!(
            "unknown entity '{}' (schema defines {} entities)",
            entity,
            entity_count
        );
    }

    let ctx = ExpandContext::new()
        .currencies(currencies)
        .languages(languages);
    let mut options = visible_results(&schema, entity, typed, term, &ctx);
    let total = options.len();
    if let Some(max) = limit {
        options.truncate(max);
    }

    let duration_ms = start.elapsed().as_millis() as u64;

    print_options(&options);
    if options.len() < total {
        println!("  {}", format!("(showing {} of {})", options.len(), total).dimmed());
    }

    println!(
        "\n{} {} option(s) ({}ms)",
        "SUCCESS".green().bold(),
        total,
        duration_ms
    );
    Ok(ExitCode::SUCCESS)
}

/// Run suggest with machine-readable JSON output
fn run_json(
    schema_path: &str,
    entity: &str,
    typed: &str,
    term: &str,
    currencies: &[String],
    languages: &[String],
    limit: Option<usize>,
) -> Result<ExitCode> {
    let start = Instant::now();

    let load_result = load_schema(Path::new(schema_path));

    let LoadResult {
        schema,
        source_hash,
        entity_count,
    } = match load_result {
        Ok(r) => r,
        Err(e) => {
            let error = input_error_to_json(&e, Some(schema_path));
            let output = SuggestOutput::failure(vec![error], None);
            print_json(&output);
            return Ok(ExitCode::from(1));
        }
    };

    if schema.get(entity).is_none() {
        let error = JsonError::new(
            super::json_output::error_codes::UNKNOWN_ENTITY,
            format!(
                "Unknown entity '{}' (schema defines {} entities)",
                entity, entity_count
            ),
        )
        .with_file(schema_path);
        let output = SuggestOutput::failure(vec![error], Some(source_hash));
        print_json(&output);
        return Ok(ExitCode::from(1));
    }

    let schema_hash = canonical_schema_hash(&schema).unwrap_or_else(|_| "unknown".to_string());

    let ctx = ExpandContext::new()
        .currencies(currencies)
        .languages(languages);
    let mut options = visible_results(&schema, entity, typed, term, &ctx);
    let total = options.len();
    if let Some(max) = limit {
        options.truncate(max);
    }
    let truncated = options.len() < total;

    let duration_ms = start.elapsed().as_millis() as u64;

    let result = SuggestResult {
        entity: entity.to_string(),
        path: typed.to_string(),
        term: term.to_string(),
        total,
        truncated,
        options,
        duration_ms,
    };
    let output = SuggestOutput::success(result, schema_hash, source_hash);
    print_json(&output);

    Ok(ExitCode::SUCCESS)
}

/// Print options to the console, marking expandable associations
fn print_options(options: &[PathOption]) {
    if options.is_empty() {
        return;
    }
    println!();
    for option in options {
        match option.relation {
            Some(relation) => {
                println!("  {} {}", option.label, format!("[{}]", relation).dimmed())
            }
            None => println!("  {}", option.label),
        }
    }
}

fn print_json(output: &SuggestOutput) {
    let json = serde_json::to_string_pretty(output)
        .expect("SuggestOutput serialization should not fail");
    println!("{}", json);
}
