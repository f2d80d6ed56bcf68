//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the institute hierarchy's invariants.
/// These are independent of persistence and presentation concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Blank name or identity field, out-of-range grade or course number.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{kind} '{key}' already exists in {parent}")]
    DuplicateKey {
        kind: &'static str,
        key: String,
        parent: String,
    },

    #[error("{kind} '{key}' not found in {parent}")]
    NotFound {
        kind: &'static str,
        key: String,
        parent: String,
    },

    /// Serialized data has the wrong shape or misses a required field.
    #[error("invalid {kind} data: {message}")]
    Format { kind: &'static str, message: String },
}

impl DomainError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn format(kind: &'static str, source: impl std::fmt::Display) -> Self {
        Self::Format {
            kind,
            message: source.to_string(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
