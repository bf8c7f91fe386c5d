//! Error types for the email relay contract.
//!
//! Nothing else in the core can fail: missing regions are silent no-ops and
//! a malformed persisted scroll value degrades to "no saved position".

use thiserror::Error;

/// Failures from the email relay collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// No usable credentials were supplied at startup.
    #[error("email relay is not configured")]
    NotConfigured,

    /// Lazy activation of the relay failed.
    #[error("email relay activation failed: {0}")]
    Activation(String),

    /// The send operation failed before reaching the relay.
    #[error("email send failed: {0}")]
    Send(String),

    /// The relay answered with a non-success status.
    #[error("email relay rejected the message (status {0})")]
    Rejected(u16),
}

/// Result type alias for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RelayError::Rejected(422);
        assert_eq!(
            format!("{}", err),
            "email relay rejected the message (status 422)"
        );
    }
}
