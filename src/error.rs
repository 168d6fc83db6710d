use thiserror::Error;

/// Result type for BinSolver API client operations
pub type Result<T> = std::result::Result<T, BinSolverError>;

/// Errors that can occur when using the BinSolver API client
#[derive(Error, Debug)]
pub enum BinSolverError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API returned a non-success response to a pack call
    ///
    /// `message` is the server-supplied error message when one was present,
    /// otherwise a fixed fallback. `status` and `code` carry the HTTP status
    /// and the server's machine-readable error code when available.
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Failed to parse a success response body
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid request configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
