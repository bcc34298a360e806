//! Error types for the domain layer.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | NotFound | 404 |
//! | NotActive | 401 |
//! | InvalidPaymentSignature | 400 |
//! | GatewayUnavailable | 502 |
//! | Storage | 500 |

use thiserror::Error;

/// Errors surfaced by membership, booking, and reporting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field was missing or malformed.
    #[error("Field '{field}' is invalid: {message}")]
    ValidationFailed { field: String, message: String },

    /// No member record matches the given email.
    #[error("Member not found: {0}")]
    NotFound(String),

    /// The member exists but is not active, or does not exist at all.
    /// Callers cannot distinguish the two cases.
    #[error("Member not active or not found: {0}")]
    NotActive(String),

    /// Payment signature verification failed.
    #[error("Payment signature verification failed")]
    InvalidPaymentSignature,

    /// The payment gateway could not be reached or rejected the request.
    #[error("Payment gateway unavailable: {0}")]
    GatewayUnavailable(String),

    /// Persistence backend failure (file I/O or remote table store).
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(email: impl Into<String>) -> Self {
        DomainError::NotFound(email.into())
    }

    pub fn not_active(email: impl Into<String>) -> Self {
        DomainError::NotActive(email.into())
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        DomainError::Storage(reason.into())
    }

    pub fn gateway(reason: impl Into<String>) -> Self {
        DomainError::GatewayUnavailable(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = DomainError::validation("email", "cannot be empty");
        assert_eq!(err.to_string(), "Field 'email' is invalid: cannot be empty");
    }

    #[test]
    fn not_active_message_does_not_reveal_existence() {
        let err = DomainError::not_active("a@x.com");
        assert!(err.to_string().contains("not active or not found"));
    }
}
