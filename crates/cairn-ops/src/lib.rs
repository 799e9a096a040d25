//! High-level operations behind each `cairn` command.
//!
//! Each operation loads what it needs from disk, drives the resolver in
//! `cairn-core`, and returns a result value for the CLI to report.

pub mod ops_clean;
pub mod ops_init;
pub mod ops_order;
pub mod ops_resolve;
