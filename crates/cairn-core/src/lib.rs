//! Core data types for the Cairn build-tree resolver.
//!
//! This crate defines the project model (projects, plugin kinds, toolchain
//! settings), the mutable [`tree::BuildTree`] and its frozen
//! [`tree::ResolvedTree`] form, `Cairn.toml` manifest parsing, the layered
//! global configuration, the repository catalog, evaluation ordering, and
//! the [`resolver::ConfigResolver`] that ties them together.
//!
//! This crate performs no deletion or other side effects on the build
//! output; deferred actions are recorded as values for an external engine.

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "Cairn.toml";

pub mod config;
pub mod evaluation;
pub mod manifest;
pub mod project;
pub mod properties;
pub mod repository;
pub mod resolver;
pub mod template;
pub mod toolchain;
pub mod tree;
