//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The message carried by `InvalidArgument` is part of the public contract and
/// is rendered verbatim by `Display`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation.
    #[error("{0}")]
    InvalidArgument(String),

    /// The operation is not supported on this value (e.g. mutating a read-only view).
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// The message without any variant prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument(msg) | DomainError::Unsupported(msg) => msg,
        }
    }
}
