//! Error types shared across pedantic crates.
//!
//! Every error enum in the workspace implements [`ErrorCode`] so the CLI
//! can report a stable, machine-readable code next to the message.
//!
//! # Example
//!
//! ```
//! use pedantic_types::{ErrorCode, ModelError};
//! use std::path::PathBuf;
//!
//! let err = ModelError::UnsupportedFormat {
//!     path: PathBuf::from("project.yaml"),
//! };
//! assert_eq!(err.code(), "MODEL_UNSUPPORTED_FORMAT");
//! assert!(!err.is_recoverable());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Unified error code interface.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**: e.g. `"MODEL_IO"`, `"CONFIG_PARSE"`
/// - **Namespace-prefixed**: the owning module comes first
/// - **Stable**: codes do not change once published
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether the user can fix the condition and retry.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code is non-empty, prefixed, and upper snake case.
///
/// # Panics
///
/// Panics with a descriptive message if validation fails.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

fn is_upper_snake_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Failure to load a project manifest.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read project manifest {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse project manifest {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported project manifest format: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl ErrorCode for ModelError {
    fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "MODEL_IO",
            Self::Parse { .. } => "MODEL_PARSE",
            Self::UnsupportedFormat { .. } => "MODEL_UNSUPPORTED_FORMAT",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A missing file can be created; malformed content needs editing.
        matches!(self, Self::Io { .. })
    }
}
