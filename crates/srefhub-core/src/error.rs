//! Error types for SrefHub

use thiserror::Error;

/// Main error type for SrefHub operations
#[derive(Error, Debug)]
pub enum HubError {
    /// The request never produced a response (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status and an error body
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// The bearer token was rejected; the session has been evicted
    #[error("Unauthorized: session expired, please log in again")]
    Unauthorized,

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Error during JSON serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image bytes could not be probed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Caller supplied something unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HubError {
    /// Shallow error taxonomy shown to users and logs.
    ///
    /// `NETWORK_ERROR` when no response arrived, the server-provided code
    /// when there is one, `UNKNOWN` otherwise.
    pub fn kind(&self) -> &str {
        match self {
            HubError::Network(_) => "NETWORK_ERROR",
            HubError::Unauthorized => "UNAUTHORIZED",
            HubError::Api {
                code: Some(code), ..
            } => code.as_str(),
            _ => "UNKNOWN",
        }
    }

    /// Whether the failure came from the session being rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, HubError::Unauthorized)
    }
}

/// Result type alias using HubError
pub type HubResult<T> = Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HubError::Api {
            status: 422,
            message: "Title is required".to_string(),
            code: Some("VALIDATION".to_string()),
        };
        assert_eq!(format!("{}", err), "API error (422): Title is required");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(HubError::Network("refused".into()).kind(), "NETWORK_ERROR");
        assert_eq!(
            HubError::Api {
                status: 400,
                message: "bad".into(),
                code: Some("DUPLICATE_SREF".into())
            }
            .kind(),
            "DUPLICATE_SREF"
        );
        assert_eq!(HubError::InvalidInput("x".into()).kind(), "UNKNOWN");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let hub_err: HubError = io_err.into();
        assert!(matches!(hub_err, HubError::Io(_)));
    }
}
