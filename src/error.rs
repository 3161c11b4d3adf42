//! Error types for the proxy service and site utilities

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the proxy service and site utilities
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to construct the outbound HTTP client
    #[error("Client initialization failed: {0}")]
    Initialization(String),

    /// A required request parameter was absent; the payload is the full
    /// client-facing message, e.g. `"Missing required parameter: url"`
    #[error("{0}")]
    MissingParameter(String),

    /// The route does not accept the request method
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(String),

    /// The upstream screenshot API answered with a non-success status
    #[error("Upstream returned {status}: {reason}")]
    Upstream { status: u16, reason: String },

    /// The outbound request failed before producing a response
    #[error("Network error: {0}")]
    Network(String),

    /// Input failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
