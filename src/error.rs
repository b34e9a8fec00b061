//! Error types for stackdef
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::Origin;

/// Result type alias for stackdef operations
pub type StackdefResult<T> = Result<T, StackdefError>;

/// Main error type for a compilation run.
///
/// Every variant is fatal: a compilation that hits one of these returns no
/// objects at all.
#[derive(Error, Debug)]
pub enum StackdefError {
    /// Definition without a usable identity, or a broken combinatorial block
    #[error("malformed definition #{index} in {file}: {message}")]
    MalformedDefinition {
        file: PathBuf,
        index: usize,
        message: String,
    },

    /// Document-level shape problem (top level, `defaults`, object lists)
    #[error("malformed document {file}: {message}")]
    MalformedDocument { file: PathBuf, message: String },

    /// A recognized field holds a value of the wrong shape
    #[error("invalid value for '{field}' in definition #{index} of {file}: expected {expected}")]
    InvalidField {
        file: PathBuf,
        index: usize,
        field: String,
        expected: &'static str,
    },

    /// Invalid value for a recognized field in a `defaults` block
    #[error("invalid default for '{field}' in {file}: expected {expected}")]
    InvalidDefault {
        file: PathBuf,
        field: String,
        expected: &'static str,
    },

    /// Source file exists but could not be read or parsed
    #[error("unreadable definition source {path}: {message}")]
    UnreadableSource { path: PathBuf, message: String },

    /// Two compiled objects map to the same resource identifier
    #[error(
        "resource identifier '{identifier}' is produced by both '{first_name}' ({first}) and '{second_name}' ({second})\n  → Fix: rename one of the definitions"
    )]
    IdentifierCollision {
        identifier: String,
        first_name: String,
        first: Origin,
        second_name: String,
        second: Origin,
    },

    /// Project configuration could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
