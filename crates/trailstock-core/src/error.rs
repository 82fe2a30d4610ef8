//! Error types for trailstock-core
//!
//! Expected business-rule failures (validation problems, unknown trailer ids)
//! are structured values, never panics. Catalog and file-loading failures
//! indicate caller or configuration defects and carry enough context to fix
//! the input.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::domain::identifiers::{IdentifierError, TrailerId};
use crate::validate::ValidationFailure;

/// Core error type for trailstock operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// One or more field-scoped validation problems
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    /// Trailer id not present in the store
    #[error("trailer not found: {0}")]
    NotFound(TrailerId),

    /// Malformed catalog (duplicate or invalid entries)
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Identifier failed boundary validation
    #[error("{0}")]
    Identifier(#[from] IdentifierError),

    /// Conflicting state (e.g. duplicate trailer id)
    #[error("conflict: {0}")]
    Conflict(String),

    /// IO failure while loading a catalog file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse failure while loading a catalog file
    #[error("parse error: {0}")]
    Parse(String),
}

// Convenience constructors using functional patterns
impl Error {
    /// Create a `NotFound` error for a trailer id.
    #[must_use]
    pub const fn not_found(id: TrailerId) -> Self {
        Self::NotFound(id)
    }

    /// Create a `Conflict` error.
    #[must_use]
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an `Io` error.
    #[must_use]
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create a `Parse` error.
    #[must_use]
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for trailstock-core operations
pub type Result<T> = std::result::Result<T, Error>;
