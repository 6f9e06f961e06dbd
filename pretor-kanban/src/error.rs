//! Error types for the move engine

use pretor_common::ErrorSeverity;
use thiserror::Error;

/// Result type for move-engine operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur at the persistence boundary.
///
/// Reducer-level anomalies (unknown status, missing task, no-op moves) are
/// normalized or ignored rather than raised, so this enum only covers the
/// external collaborators.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The data store rejected a write batch
    #[error("store rejected write: {message}")]
    Store { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a store rejection error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store { .. })
    }

    /// Severity for logging and notice rendering
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Store { .. } => ErrorSeverity::Warning,
            Self::Serialization(_) => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::store("timeout");
        assert_eq!(err.to_string(), "store rejected write: timeout");
    }

    #[test]
    fn test_store_rejections_are_retryable() {
        assert!(BoardError::store("offline").is_retryable());
        assert_eq!(BoardError::store("offline").severity(), ErrorSeverity::Warning);
    }
}
