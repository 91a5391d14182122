//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic loading/derivation failures. Rendering
/// and process concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A source file is missing or unreadable.
    #[error("io failure: {0}")]
    Io(String),

    /// Source text is malformed (tabular header/row, JSON syntax).
    #[error("parse failure: {0}")]
    Parse(String),

    /// A field value is missing or not convertible to its required type.
    #[error("invalid value: {0}")]
    Value(String),
}

impl DomainError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn value(msg: impl Into<String>) -> Self {
        Self::Value(msg.into())
    }
}
