//! HTTP transport abstraction.
//!
//! The invocation client never talks to `reqwest` directly; it hands a fully
//! built request to an injectable [`HttpTransport`]. This keeps the core
//! testable with synthetic transports and lets callers plug in their own
//! signing or proxy layer. Timeouts and cancellation belong to the transport.

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::LlmError;

pub mod errors;
pub mod http;

pub use errors::classify_bedrock_http_error;
pub use http::ReqwestTransport;

/// A serialized model invocation.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub model_id: String,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Raw backend answer. Non-success statuses are returned, not raised; the
/// client decides how to classify them.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON.
    pub fn json(&self) -> Result<serde_json::Value, LlmError> {
        serde_json::from_slice(&self.body).map_err(|e| {
            LlmError::MalformedResponse(format!("response body is not valid JSON: {e}"))
        })
    }

    /// First value of header `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Sends one serialized request and returns the raw response.
///
/// Implementations return `Err` only for failures that produced no response
/// at all (connection, TLS, timeout).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, LlmError>;
}
