/// Unified error type for nashor
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NashorError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Deserialization and value-shape errors
    #[error("Parse error: {0}")]
    Parse(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("credential environment variable '{0}' is not set")]
    CredentialResolution(String),

    #[error("Missing required input: {0}")]
    MissingInput(String),

    // Pipeline routing errors
    #[error("no pipeline route to requested type: {0}")]
    NoRoute(String),

    // Non-success responses from the remote API
    #[error("API returned status {status} for {url}")]
    ApiStatus { status: u16, url: String },
}

/// Result type alias using NashorError
pub type Result<T> = std::result::Result<T, NashorError>;

impl NashorError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a missing input error
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput(name.into())
    }

    /// Create a no-route error
    pub fn no_route(msg: impl Into<String>) -> Self {
        Self::NoRoute(msg.into())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for NashorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
