//! Error types for corkboard.

use thiserror::Error;

/// Common error type for corkboard operations.
#[derive(Error, Debug)]
pub enum CorkboardError {
    /// Database error.
    ///
    /// Wraps errors from the backing store. sqlx errors are converted
    /// automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error from file storage or transfer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Anything else that should surface as a server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for CorkboardError {
    fn from(e: sqlx::Error) -> Self {
        CorkboardError::Database(e.to_string())
    }
}

/// Result type alias for corkboard operations.
pub type Result<T> = std::result::Result<T, CorkboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = CorkboardError::Validation("title is required".to_string());
        assert_eq!(err.to_string(), "validation error: title is required");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = CorkboardError::NotFound("board".to_string());
        assert_eq!(err.to_string(), "board not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: CorkboardError = io_err.into();
        assert!(matches!(err, CorkboardError::Io(_)));
        assert!(err.to_string().contains("missing file"));
    }

    #[test]
    fn test_result_alias() {
        fn sample() -> Result<i32> {
            Ok(7)
        }
        assert_eq!(sample().unwrap(), 7);
    }
}
