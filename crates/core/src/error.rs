//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are classified outcomes, not faults: every variant maps onto a client
/// facing status at the HTTP boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The operation targeted an identifier that does not exist.
    #[error("not found")]
    NotFound,

    /// Caller input was structurally invalid for the operation.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The operation would break a uniqueness rule the store enforces.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
