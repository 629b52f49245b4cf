//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// unknown records, data outside the fixed reference sets). Storage failures
/// belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A caller-supplied field failed validation.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// An identifier was malformed (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record does not exist.
    #[error("not found")]
    NotFound,

    /// A stored value lies outside the known fixed sets (payer, category, ...).
    #[error("corrupt data: {0}")]
    CorruptData(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptData(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Name of the offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_its_field() {
        let err = DomainError::validation("amount", "must be greater than zero");
        assert_eq!(err.field(), Some("amount"));
        assert_eq!(err.to_string(), "invalid amount: must be greater than zero");
    }

    #[test]
    fn non_validation_errors_have_no_field() {
        assert_eq!(DomainError::not_found().field(), None);
        assert_eq!(DomainError::corrupt("payer 'x'").field(), None);
    }
}
