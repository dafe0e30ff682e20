//! Orchestrator for single-shot text generation
//!
//! [`TextGenerator`] is the public entry point. One call runs, in order:
//! adapter resolution, optional text extraction, prompt composition, request
//! building, one invocation, and result extraction. Adapter resolution comes
//! first so an unsupported model never reaches the extractor or the network.

use std::sync::Arc;

use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::client::BedrockClient;
use crate::config::BedrockConfig;
use crate::error::LlmError;
use crate::extract::{Document, PlainTextExtractor, TextExtractor, sanitize_extracted_text};
use crate::params::GenerationParams;
use crate::registry::AdapterRegistry;
use crate::transport::TransportResponse;

pub mod prompt;
pub mod summarize;

pub use prompt::compose_prompt;
pub use summarize::{SummarizeRequest, SummaryLanguage, summary_prompt};

/// Text combined with the prompt: given directly, or extracted from a document.
#[derive(Debug, Clone)]
pub enum TextSource {
    Text(String),
    Document(Document),
}

/// Input of [`TextGenerator::generate`].
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Prompt text. When empty, the prompt carried by `params` is used.
    pub prompt: String,
    pub source: Option<TextSource>,
    /// Marker in `prompt` replaced by the source text.
    pub insert_marker: Option<String>,
    /// Model id; the configured default when `None`.
    pub model_id: Option<String>,
    pub params: Option<GenerationParams>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(TextSource::Text(text.into()));
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.source = Some(TextSource::Document(document));
        self
    }

    pub fn with_insert_marker(mut self, marker: impl Into<String>) -> Self {
        self.insert_marker = Some(marker.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = Some(params);
        self
    }
}

/// Turns prompts into model output through the adapter registry and a
/// [`BedrockClient`].
#[derive(Clone)]
pub struct TextGenerator {
    client: BedrockClient,
    registry: AdapterRegistry,
    extractor: Arc<dyn TextExtractor>,
}

impl TextGenerator {
    /// Generator with the default registry and the plain-text extractor.
    pub fn new(client: BedrockClient) -> Self {
        Self {
            client,
            registry: AdapterRegistry::default(),
            extractor: Arc::new(PlainTextExtractor),
        }
    }

    pub fn from_config(config: BedrockConfig) -> Result<Self, LlmError> {
        Ok(Self::new(BedrockClient::new(config)?))
    }

    pub fn with_registry(mut self, registry: AdapterRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn client(&self) -> &BedrockClient {
        &self.client
    }

    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    fn model_or_default(&self, model_id: Option<&str>) -> String {
        model_id
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(self.client.config().model_id.as_str())
            .to_string()
    }

    /// Send `prompt` as-is to the default model with default parameters.
    pub async fn generate_text(&self, prompt: impl Into<String>) -> Result<String, LlmError> {
        self.generate(GenerateRequest::new(prompt)).await
    }

    /// Run one generation and return the model's text.
    pub async fn generate(&self, request: GenerateRequest) -> Result<String, LlmError> {
        let model_id = self.model_or_default(request.model_id.as_deref());
        let span = tracing::info_span!(
            "bedrock.generate",
            model_id = %model_id,
            family = tracing::field::Empty,
            invocation_id = %Uuid::new_v4(),
        );

        self.generate_in_span(&model_id, request)
            .instrument(span)
            .await
    }

    async fn generate_in_span(
        &self,
        model_id: &str,
        request: GenerateRequest,
    ) -> Result<String, LlmError> {
        let adapter = self.registry.resolve(model_id)?;
        tracing::Span::current().record("family", adapter.family().as_str());

        let source_text = match request.source {
            None => None,
            Some(TextSource::Text(text)) => Some(text),
            Some(TextSource::Document(document)) => Some(self.extract(&document).await?),
        };

        let params = request.params.unwrap_or_default();
        let base_prompt = if request.prompt.is_empty() {
            params.prompt().to_string()
        } else {
            request.prompt
        };
        let prompt = compose_prompt(
            &base_prompt,
            source_text.as_deref(),
            request.insert_marker.as_deref(),
        );
        if prompt.trim().is_empty() {
            return Err(LlmError::InvalidInput(
                "prompt must not be empty".to_string(),
            ));
        }

        let params = params
            .with_prompt(prompt)
            .with_default_temperature(self.client.config().default_temperature);
        let body = adapter.build_request(&params)?;
        let response = self.client.invoke(model_id, &body).await?;
        let text = adapter.parse_response(&response)?;

        tracing::info!(
            prompt_chars = params.prompt().len(),
            output_chars = text.len(),
            "generation completed"
        );
        Ok(text)
    }

    async fn extract(&self, document: &Document) -> Result<String, LlmError> {
        let text = self
            .extractor
            .extract_text(document)
            .await
            .map_err(|e| match e {
                LlmError::ExtractionFailed(_) => e,
                other => LlmError::ExtractionFailed(other.to_string()),
            })?;
        tracing::debug!(
            mime_type = %document.detected_mime_type(),
            chars = text.len(),
            "document text extracted"
        );
        Ok(sanitize_extracted_text(text))
    }

    /// Send a caller-built request body and return the backend's response
    /// untouched (status, headers and body bytes).
    ///
    /// No adapter is involved, so any model id the backend accepts works,
    /// including ones this crate has no adapter for.
    pub async fn run_raw(
        &self,
        model_id: &str,
        body: &Value,
    ) -> Result<TransportResponse, LlmError> {
        self.run_raw_bytes(model_id, serde_json::to_vec(body)?).await
    }

    /// [`run_raw`](Self::run_raw) with the body given as a JSON string, sent
    /// byte for byte.
    pub async fn run_raw_str(
        &self,
        model_id: &str,
        body: &str,
    ) -> Result<TransportResponse, LlmError> {
        serde_json::from_str::<serde::de::IgnoredAny>(body)?;
        self.run_raw_bytes(model_id, body.as_bytes().to_vec()).await
    }

    async fn run_raw_bytes(
        &self,
        model_id: &str,
        payload: Vec<u8>,
    ) -> Result<TransportResponse, LlmError> {
        let model_id = model_id.trim();
        if model_id.is_empty() {
            return Err(LlmError::InvalidInput(
                "model id is required for raw invocations".to_string(),
            ));
        }
        let span = tracing::info_span!(
            "bedrock.run_raw",
            model_id = %model_id,
            invocation_id = %Uuid::new_v4(),
        );
        self.client
            .invoke_bytes(model_id, payload)
            .instrument(span)
            .await
    }
}

impl std::fmt::Debug for TextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextGenerator")
            .field("client", &self.client)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
