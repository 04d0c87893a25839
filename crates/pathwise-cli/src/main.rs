//! Pathwise CLI - Command-line interface for entity path suggestion
//!
//! This binary provides commands for expanding dotted paths against an
//! entity schema dump, validating dumps, and inspecting their structure.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use pathwise_cli::commands;

/// Pathwise - Entity Path Suggestion Toolkit
#[derive(Parser)]
#[command(name = "pathwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a typed path and print the visible suggestions
    Suggest {
        /// Path to the schema dump (JSON)
        #[arg(short, long)]
        schema: String,

        /// Root entity to expand from
        #[arg(short, long)]
        entity: String,

        /// Typed path; completed segments end with '.' (e.g. "cover.media.")
        #[arg(short, long, default_value = "")]
        path: String,

        /// Case-sensitive search term filtering option values
        #[arg(short, long, default_value = "")]
        term: String,

        /// Currency ISO codes for price expansion (comma-separated)
        #[arg(long, value_delimiter = ',')]
        currencies: Vec<String>,

        /// Locale codes for translation expansion (comma-separated)
        #[arg(long, value_delimiter = ',')]
        languages: Vec<String>,

        /// Maximum number of options to print (applied after ordering)
        #[arg(long)]
        limit: Option<usize>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a schema dump without expanding anything
    Validate {
        /// Path to the schema dump (JSON)
        #[arg(short, long)]
        schema: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical fingerprint and structure of a schema dump
    Inspect {
        /// Path to the schema dump (JSON)
        #[arg(short, long)]
        schema: String,

        /// Entity to show in detail (default: list all entities)
        #[arg(short, long)]
        entity: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Suggest {
            schema,
            entity,
            path,
            term,
            currencies,
            languages,
            limit,
            json,
        } => commands::suggest::run(
            &schema,
            &entity,
            &path,
            &term,
            &currencies,
            &languages,
            limit,
            json,
        ),
        Commands::Validate { schema, json } => commands::validate::run(&schema, json),
        Commands::Inspect {
            schema,
            entity,
            json,
        } => commands::inspect::run(&schema, entity.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
