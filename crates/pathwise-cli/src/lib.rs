//! Pathwise CLI library.
//!
//! This crate provides the core functionality for the Pathwise CLI,
//! including schema loading and the suggest, validate, and inspect commands.

pub mod commands;
pub mod input;
