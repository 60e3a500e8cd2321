//! Service-layer error handling
//!
//! Domain failures stay typed all the way up; the web layer maps them
//! onto HTTP responses (`InvalidArgument`/`UnsupportedFrequency` become
//! client errors, `Internal` a 500).

use homehub_shared::DomainError;
use thiserror::Error;

/// Errors surfaced by the domain services.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for the domain services.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::Domain(DomainError::InvalidArgument(errors.to_string()))
    }
}

impl ServiceError {
    /// True when the failure should be reported as bad client input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::Domain(_) | ServiceError::Validation(_) | ServiceError::NotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_pass_through() {
        let err: ServiceError = DomainError::UnsupportedFrequency("hourly".to_string()).into();
        assert_eq!(err.to_string(), "unsupported frequency: hourly");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_internal_is_not_client_error() {
        let err: ServiceError = anyhow::anyhow!("boom").into();
        assert!(!err.is_client_error());
    }
}
