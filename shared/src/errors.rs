//! Error types for the HomeHub domain layer

use thiserror::Error;

/// Failures produced by the pure calculation layer.
///
/// Everything here is local and synchronous; there is no partial state to
/// roll back. The web layer maps `InvalidArgument` and
/// `UnsupportedFrequency` onto client-input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unsupported frequency: {0}")]
    UnsupportedFrequency(String),

    #[error("date out of range: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::InvalidArgument("interval must be positive".to_string());
        assert_eq!(err.to_string(), "invalid argument: interval must be positive");

        let err = DomainError::UnsupportedFrequency("hourly".to_string());
        assert_eq!(err.to_string(), "unsupported frequency: hourly");
    }
}
