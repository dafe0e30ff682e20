//! Bedrock runtime invocation client.
//!
//! Owns the configuration and the transport handle. One call to
//! [`BedrockClient::invoke`] is one `InvokeModel` request/response cycle; the
//! client keeps no per-call state and can be shared across tasks.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::config::BedrockConfig;
use crate::error::LlmError;
use crate::transport::{
    HttpTransport, ReqwestTransport, TransportRequest, TransportResponse,
    classify_bedrock_http_error,
};

#[derive(Clone)]
pub struct BedrockClient {
    config: BedrockConfig,
    transport: Arc<dyn HttpTransport>,
}

impl BedrockClient {
    /// Client using the default `reqwest` transport.
    pub fn new(config: BedrockConfig) -> Result<Self, LlmError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Client using a caller-supplied transport.
    pub fn with_transport(config: BedrockConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &BedrockConfig {
        &self.config
    }

    /// `POST` target for `model_id`.
    pub fn invoke_url(&self, model_id: &str) -> String {
        format!(
            "{}/model/{}/invoke",
            self.config.endpoint(),
            urlencoding::encode(model_id)
        )
    }

    fn build_headers(&self) -> Result<HeaderMap, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(api_key) = self.config.api_key_value() {
            let mut value = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid Bedrock bearer token: {e}"))
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (k, v) in &self.config.http_headers {
            let name = HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid header name '{k}': {e}"))
            })?;
            let value = HeaderValue::from_str(v).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid value for header '{k}': {e}"))
            })?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// Send `body` to `model_id` and return the parsed JSON response body.
    pub async fn invoke(
        &self,
        model_id: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, LlmError> {
        let payload = serde_json::to_vec(body)?;
        self.invoke_bytes(model_id, payload).await?.json()
    }

    /// Send an already serialized body and return the successful response
    /// untouched. Non-success statuses are still turned into errors.
    pub async fn invoke_bytes(
        &self,
        model_id: &str,
        payload: Vec<u8>,
    ) -> Result<TransportResponse, LlmError> {
        let request = TransportRequest {
            model_id: model_id.to_string(),
            url: self.invoke_url(model_id),
            headers: self.build_headers()?,
            body: payload,
        };

        tracing::debug!(
            model_id,
            url = %request.url,
            bytes = request.body.len(),
            "invoking bedrock model"
        );

        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            let err = classify_bedrock_http_error(response.status, &response.text());
            tracing::warn!(model_id, status = response.status, error = %err, "bedrock invocation failed");
            return Err(err);
        }

        tracing::debug!(
            model_id,
            status = response.status,
            bytes = response.body.len(),
            "bedrock invocation succeeded"
        );
        Ok(response)
    }
}

impl std::fmt::Debug for BedrockClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BedrockClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
