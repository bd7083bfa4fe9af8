//! Error types for the Data Pipeline client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Data Pipeline client
///
/// The four variants map to the four failure kinds callers need to
/// distinguish: network-level failure, a structured service rejection, a
/// rejection whose body could not be parsed, and a local schema mismatch.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request construction or network I/O failed before a response was
    /// obtained
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service returned a non-200 response with a parseable error body
    #[error("service error (status {status} {status_text}): {code}: {message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// HTTP status text ("Bad Request", ...)
        status_text: String,
        /// Short error code ("ValidationException", ...)
        code: String,
        /// Human-oriented message from the service
        message: String,
    },

    /// The service returned a non-200 response whose body is not a valid
    /// error envelope
    #[error("service returned status {status} {status_text} with an unparseable error body")]
    MalformedErrorBody {
        /// HTTP status code
        status: u16,
        /// HTTP status text
        status_text: String,
    },

    /// A request could not be encoded to JSON; the network was never
    /// contacted
    #[error("failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A 200 response body could not be decoded into the expected shape
    #[error("failed to deserialize response: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl ClientError {
    /// Short error code for a service rejection, if this is one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Check if this error is a structured service rejection
    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Check if the service is throttling the caller
    pub fn is_throttling(&self) -> bool {
        self.code() == Some("ThrottlingException")
    }

    /// Check if the referenced pipeline does not exist or was deleted
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.code(),
            Some("PipelineNotFoundException") | Some("PipelineDeletedException")
        )
    }
}
