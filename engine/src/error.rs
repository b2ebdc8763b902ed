//! Engine error handling
//!
//! Persistence failures are deliberately non-fatal: reads degrade to
//! defaults and writes are best-effort, so most store errors are logged
//! at the call site instead of surfacing here. What remains is the small
//! set of errors an embedding application must react to.

use stride_shared::DomainError;
use thiserror::Error;

/// Engine error type surfaced to embedding applications
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Internal engine error")]
    Internal(#[from] anyhow::Error),
}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => EngineError::Validation(msg),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_maps_to_validation() {
        let err: EngineError = DomainError::Validation("bad input".to_string()).into();
        assert!(matches!(err, EngineError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: bad input");
    }
}
