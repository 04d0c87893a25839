//! Validate command implementation
//!
//! Validates a schema dump and reports errors and warnings.

use anyhow::{Context, Result};
use colored::Colorize;
use pathwise_schema::{canonical_schema_hash, validate_schema, ValidationResult};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    input_error_to_json, validation_error_to_json, validation_warning_to_json, JsonError,
    JsonWarning, ValidateOutput, ValidateResult,
};
use crate::input::{load_schema, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `schema_path` - Path to the schema dump (JSON)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid (warnings allowed), 1 if invalid
pub fn run(schema_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(schema_path)
    } else {
        run_human(schema_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(schema_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), schema_path);

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

    let validation_result = validate_schema(&schema);
    let duration_ms = start.elapsed().as_millis() as u64;

    print_validation_results(&validation_result);

    if validation_result.is_ok() {
        println!(
            "\n{} Schema is valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Schema has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            validation_result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(schema_path: &str) -> Result<ExitCode> {
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
            let output = ValidateOutput::failure(vec![error], vec![], None, None);
            print_json(&output);
            return Ok(ExitCode::from(1));
        }
    };

    let schema_hash = canonical_schema_hash(&schema).unwrap_or_else(|_| "unknown".to_string());

    let validation_result = validate_schema(&schema);
    let duration_ms = start.elapsed().as_millis() as u64;

    let warnings: Vec<JsonWarning> = validation_result
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    let output = if validation_result.is_ok() {
        let result = ValidateResult {
            entity_count,
            duration_ms,
        };
        ValidateOutput::success(result, schema_hash, source_hash, warnings)
    } else {
        let errors: Vec<JsonError> = validation_result
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        ValidateOutput::failure(errors, warnings, Some(schema_hash), Some(source_hash))
    };

    print_json(&output);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Print validation results to the console
fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

fn print_json(output: &ValidateOutput) {
    let json = serde_json::to_string_pretty(output)
        .expect("ValidateOutput serialization should not fail");
    println!("{}", json);
}
