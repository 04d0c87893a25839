//! Pathwise End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the suggestion-critical flows:
//!
//! - Expansion: schema dump -> ordered path options
//! - Validation: dump structure errors and warnings
//! - **Determinism**: identical output for identical input across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pathwise-tests
//! ```
//!
//! ## Fixtures
//!
//! The `fixtures` module carries the product catalog dump shared by the
//! test files, plus helpers that write dumps into temp directories for
//! exercising the CLI commands:
//!
//! ```rust,ignore
//! use pathwise_tests::fixtures::{catalog_schema, SchemaDumpFixture};
//!
//! let fixture = SchemaDumpFixture::new();
//! let path = fixture.write_catalog();
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{catalog_dump, catalog_schema, SchemaDumpFixture};
