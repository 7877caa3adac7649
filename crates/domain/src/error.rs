//! Unified error types for the domain layer
//!
//! Every invariant check in this crate reports through [`DomainError`], so
//! callers can surface a field-level message without parsing strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("{0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for a field-level check.
    ///
    /// The message is shown to the user as-is, so it should read as a
    /// sentence ("Name cannot be empty.").
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_displays_message_verbatim() {
        let err = DomainError::validation("Name cannot be empty.");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Name cannot be empty.");
    }

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("at most 3 offered skills");
        assert_eq!(err.to_string(), "Constraint violation: at most 3 offered skills");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown state: ZOMBIE");
        assert!(err.to_string().contains("ZOMBIE"));
    }
}
