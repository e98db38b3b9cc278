//! cmodule generates boilerplate header/source pairs for C modules.
//! It derives an include guard from the header name and stamps both files
//! with a configurable copyright banner.

/// Command-line interface module for the cmodule application
pub mod cli;

/// Module rules loading
/// Supports JSON (module-rules.json) and, by extension, YAML
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the cmodule application
pub mod error;

/// Include-guard token derivation
pub mod guard;

/// Module generation orchestration
/// Validates the target directory and writes both files
pub mod processor;

/// Header and implementation text rendering
pub mod renderer;
