//! Shared utilities for Cairn.
//!
//! Cross-cutting concerns used by the other Cairn crates: the error
//! taxonomy, filesystem and path helpers, fingerprint hashing, and
//! Cargo-style terminal status lines.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
