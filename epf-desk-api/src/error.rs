use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Rejected by server (HTTP {status}): {}", message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Invalid transition: {action} is not allowed from {from}")]
    InvalidTransition { action: String, from: String },

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ApiError {
    /// Message supplied by the backend, if the failure came from a response body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::TransportError(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
