//! Pathwise Entity Schema Library
//!
//! This crate provides types, validation, hashing, and path expansion for
//! entity schemas. Schemas are JSON documents describing an entity graph:
//! scalar fields, associations between entities, and structured price
//! objects, as dumped by an e-commerce data-abstraction-layer registry.
//!
//! # Overview
//!
//! The core operation turns a dotted, partially typed path like
//! `cover.media.` into the ordered list of selectable completions at that
//! point:
//!
//! - **Descent**: completed segments walk to-one associations through the
//!   graph; anything unresolvable degrades into search-filter text.
//! - **Synthetic leaves**: `translations`, `visibilities`, and `price`
//!   fields expand into per-language, fixed-flag, and per-currency options
//!   that have no literal counterpart in the schema.
//!
//! All of it is pure and synchronous over an immutable schema snapshot;
//! callers own state and re-invoke on input change.
//!
//! # Example
//!
//! ```
//! use pathwise_schema::{EntityDefinition, EntitySchema, ExpandContext, Property, Relation};
//! use pathwise_schema::suggest::visible_results;
//!
//! let mut schema = EntitySchema::new();
//! schema.insert(
//!     EntityDefinition::builder("product")
//!         .property("id", Property::Uuid)
//!         .property("name", Property::String)
//!         .association("manufacturer", Relation::ManyToOne, "manufacturer")
//!         .build(),
//! );
//! schema.insert(
//!     EntityDefinition::builder("manufacturer")
//!         .property("name", Property::String)
//!         .build(),
//! );
//!
//! let ctx = ExpandContext::new();
//! let results = visible_results(&schema, "product", "manufacturer.", "", &ctx);
//! assert_eq!(results[0].value, "manufacturer.name");
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`property`]: Property and relation types
//! - [`schema`]: Entity schema and definition types
//! - [`validation`]: Schema validation functions
//! - [`hash`]: Canonical schema hashing
//! - [`query`]: Typed-path tokenizing and descent
//! - [`expand`]: Expansion of a path point into options
//! - [`suggest`]: Search filtering and ordering of options

pub mod error;
pub mod expand;
pub mod hash;
pub mod property;
pub mod query;
pub mod schema;
pub mod suggest;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, SchemaError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use expand::{
    expand_paths, ExpandContext, PathOption, DEFAULT_KEY, PRICE_FIELDS, PRICE_PROPERTY,
    TRANSLATIONS_PROPERTY, VISIBILITIES_PROPERTY, VISIBILITY_FIELDS,
};
pub use hash::canonical_schema_hash;
pub use property::{Property, Relation};
pub use query::{path_parts, resolve, PathCursor};
pub use schema::{EntityDefinition, EntityDefinitionBuilder, EntitySchema};
pub use suggest::{search_options, sort_options, visible_results};
pub use validation::validate_schema;
