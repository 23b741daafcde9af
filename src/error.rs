//! Error types for the workflow

use thiserror::Error;

/// Result type alias for workflow operations
pub type WorkflowResult<T> = std::result::Result<T, WorkflowError>;

/// Error conditions the workflow recognizes internally.
///
/// These never escape the orchestrator: every failure is recovered into
/// one or more renderable Alfred items so the Script Filter always has
/// something to show. Transport failures and malformed responses are
/// reported as absence by the client and parsers rather than as errors.
#[derive(Error, Debug, Clone)]
pub enum WorkflowError {
    /// HTTP client could not be built or a request could not be issued
    #[error("HTTP error: {message}")]
    HttpError {
        message: String,
        status_code: Option<u16>,
    },

    /// Configuration error (missing or unusable settings)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for WorkflowError {
    fn from(error: reqwest::Error) -> Self {
        WorkflowError::HttpError {
            message: error.to_string(),
            status_code: error.status().map(|s| s.as_u16()),
        }
    }
}
