//! Domain Errors
//!
//! Error types for domain operations.

use std::fmt;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A lookup by id or filter matched no stored record.
    #[error("{0}")]
    NotFound(String),

    /// A create or update would violate a uniqueness or scheduling rule.
    #[error("{0}")]
    AlreadyExists(String),

    /// Structural field validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Any other storage fault.
    #[error("repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found(entity: &str, id: impl fmt::Display) -> Self {
        Self::NotFound(format!("{entity} with id {id} not found"))
    }

    /// Not-found raised when a collection query matched nothing. Absence of
    /// data is always surfaced this way, never as an empty list.
    pub fn nothing_found(what: impl fmt::Display) -> Self {
        Self::NotFound(format!("no {what} found"))
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DomainError::not_found("faculty", 7);
        assert_eq!(err.to_string(), "faculty with id 7 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_nothing_found_message() {
        let err = DomainError::nothing_found("students in group 42");
        assert_eq!(err.to_string(), "no students in group 42 found");
        assert!(err.is_not_found());
    }
}
