//! `reqwest`-backed transport.

use std::time::Duration;

use async_trait::async_trait;

use super::{HttpTransport, TransportRequest, TransportResponse};
use crate::error::LlmError;

/// Default transport: one POST per invocation over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            LlmError::ConfigurationError(format!("Failed to build HTTP client: {e}"))
        })?;
        Ok(Self { client })
    }

    /// Reuse an existing client (connection pool, proxy settings, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, LlmError> {
        let resp = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?
            .to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
