//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The form was refused before anything was sent
    #[error("{0}")]
    Rejected(#[from] AppError),

    /// The API answered with an error
    #[error("{message}")]
    Api {
        code: ErrorCode,
        status: u16,
        message: String,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Error code best describing this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Rejected(e) => e.code,
            Self::Api { code, .. } => *code,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
        }
    }

    /// Message suitable for the error alert above the form
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(e) => e.message.clone(),
            Self::Api { message, .. } => message.clone(),
            other => other.code().message().to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
