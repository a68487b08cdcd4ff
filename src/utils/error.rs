use thiserror::Error;

/// Main error type for the Luhn tester CLI.
///
/// Malformed card numbers are never errors; they are classified by the
/// validator and reported as a verdict. This type covers presentation
/// failures only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Report serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for CLI operations
pub type AppResult<T> = Result<T, AppError>;
