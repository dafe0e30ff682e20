//! Shared test helpers: an in-memory transport that records every request.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;

use bedrock_genai::config::BedrockConfig;
use bedrock_genai::error::LlmError;
use bedrock_genai::transport::{HttpTransport, TransportRequest, TransportResponse};
use bedrock_genai::{BedrockClient, TextGenerator};

/// Transport replaying canned responses and capturing requests.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, LlmError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, body.to_string());
    }

    pub fn push_raw(&self, status: u16, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(TransportResponse {
            status,
            headers: HeaderMap::new(),
            body: body.into().into_bytes(),
        }));
    }

    pub fn push_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn last_body(&self) -> Value {
        serde_json::from_slice(&self.last_request().body).expect("request body is JSON")
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, LlmError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::HttpError("no canned response left".into())))
    }
}

/// Generator wired to `transport` with a test API key.
pub fn generator(transport: Arc<StubTransport>) -> TextGenerator {
    generator_with(BedrockConfig::new().with_api_key("test-key"), transport)
}

pub fn generator_with(config: BedrockConfig, transport: Arc<StubTransport>) -> TextGenerator {
    TextGenerator::new(BedrockClient::with_transport(config, transport))
}

pub fn titan_output(text: &str) -> Value {
    serde_json::json!({
        "inputTextTokenCount": 5,
        "results": [{ "tokenCount": 3, "outputText": text, "completionReason": "FINISH" }]
    })
}

pub fn claude_output(text: &str) -> Value {
    serde_json::json!({ "completion": text, "stop_reason": "stop_sequence" })
}
