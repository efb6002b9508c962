//! Global error types for the listings client.
//!
//! All error categories are unified into a single `PlError` enum with
//! conversions from underlying library errors. Server-side failures keep
//! the JSON error body the server sent so callers can inspect it.

use thiserror::Error;

/// Convenience type alias for Results using PlError.
pub type PlResult<T> = Result<T, PlError>;

/// Unified error type for the listings client.
#[derive(Error, Debug)]
pub enum PlError {
    // -- Configuration errors --
    /// Failed to load or parse application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Network errors --
    /// HTTP request failed before a response was received.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Server answered with a non-success status.
    #[error("server error (status {status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Error message from server, or the status reason.
        message: String,
        /// Parsed JSON error body, when the server sent one.
        payload: Option<serde_json::Value>,
    },

    // -- Data errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// An unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlError {
    /// The server's error body, if this error carries one.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            PlError::ServerError { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// HTTP status code for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            PlError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request never reached the server or never got an answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, PlError::Http(_) | PlError::Timeout(_))
    }
}

impl From<serde_json::Error> for PlError {
    fn from(e: serde_json::Error) -> Self {
        PlError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for PlError {
    fn from(e: toml::de::Error) -> Self {
        PlError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pl_error_display() {
        let err = PlError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn test_server_error_payload() {
        let err = PlError::ServerError {
            status: 404,
            message: "Enquiry not found".into(),
            payload: Some(serde_json::json!({"status": 404, "message": "Enquiry not found"})),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.payload().unwrap()["message"], "Enquiry not found");
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "server error (status 404): Enquiry not found");
    }

    #[test]
    fn test_transport_errors_have_no_payload() {
        let err = PlError::Timeout("30s elapsed".into());
        assert!(err.is_transport());
        assert!(err.payload().is_none());
        assert!(err.status().is_none());
    }

    #[test]
    fn test_from_serde_json() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: PlError = parse.unwrap_err().into();
        assert!(matches!(err, PlError::Serialization(_)));
    }
}
