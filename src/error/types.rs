//! Core error types.

use thiserror::Error;

/// Errors produced while preparing, sending or interpreting a model invocation.
///
/// None of these are retried internally; every variant is terminal for the
/// invocation that produced it.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// The model identifier does not resolve to any registered adapter.
    #[error("Unsupported model: '{0}' (expected an Amazon Titan or Anthropic Claude model)")]
    UnsupportedModel(String),

    /// The upstream text-extraction collaborator failed.
    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    /// Network-level failure (connection, TLS, timeout, ...).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The backend answered with a non-success status code.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// The response body lacks a field the adapter needs.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A caller-supplied JSON payload could not be parsed.
    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The caller passed unusable input (e.g. an empty prompt).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Coarse classification of [`LlmError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unknown model identifier, raised before any network call.
    Model,
    /// Text extraction collaborator failure.
    Extraction,
    /// Network failure or non-success status.
    Transport,
    /// Response body did not have the expected shape.
    Response,
    Configuration,
    /// Bad caller input, including unparseable parameter payloads.
    Input,
}

impl LlmError {
    /// Create an API error without details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Classify this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedModel(_) => ErrorCategory::Model,
            Self::ExtractionFailed(_) => ErrorCategory::Extraction,
            Self::HttpError(_) | Self::ApiError { .. } => ErrorCategory::Transport,
            Self::MalformedResponse(_) => ErrorCategory::Response,
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::JsonError(_) | Self::InvalidInput(_) => ErrorCategory::Input,
        }
    }

    /// True for network failures and non-success status codes.
    pub const fn is_transport_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Transport)
    }

    /// HTTP status code, when the backend returned one.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }
}
