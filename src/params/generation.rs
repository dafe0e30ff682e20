//! Normalized text-generation parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Temperature used when none was supplied.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

/// Backend-agnostic generation parameters for one invocation.
///
/// `top_p` and `max_response_tokens` stay optional end to end: when absent
/// the adapter omits the field (or applies the backend's own documented
/// default) instead of inventing a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,

    #[serde(
        rename = "responseMaxTokenCount",
        skip_serializing_if = "Option::is_none"
    )]
    max_response_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    stop_sequences: Vec<String>,
}

/// Wire shape of the JSON parameter payload. Every key is optional and an
/// explicit `null` is the same as a missing key.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParamsPayload {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    temperature: Option<f64>,
    #[serde(default)]
    top_p: Option<f64>,
    #[serde(default)]
    response_max_token_count: Option<u32>,
    #[serde(default)]
    stop_sequences: Option<Vec<String>>,
}

impl GenerationParams {
    /// Parameters with only a prompt; every tuning field is unset.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            top_p: None,
            max_response_tokens: None,
            stop_sequences: Vec::new(),
        }
    }

    /// Build from discrete fields, each tuning value independently optional.
    pub fn from_parts(
        prompt: impl Into<String>,
        temperature: Option<f64>,
        top_p: Option<f64>,
        max_response_tokens: Option<u32>,
        stop_sequences: Option<Vec<String>>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            top_p,
            max_response_tokens,
            stop_sequences: stop_sequences.unwrap_or_default(),
        }
    }

    /// Parse a JSON payload such as
    /// `{"temperature": 0.5, "topP": 0.9, "responseMaxTokenCount": 300, "stopSequences": ["END"]}`.
    pub fn from_json_str(payload: &str) -> Result<Self, LlmError> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, LlmError> {
        if !value.is_object() {
            return Err(LlmError::JsonError(format!(
                "model parameters must be a JSON object, got: {value}"
            )));
        }
        let payload = ParamsPayload::deserialize(value)?;
        Ok(Self::from_parts(
            payload.prompt.unwrap_or_default(),
            payload.temperature,
            payload.top_p,
            payload.response_max_token_count,
            payload.stop_sequences,
        ))
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_max_response_tokens(mut self, max_tokens: u32) -> Self {
        self.max_response_tokens = Some(max_tokens);
        self
    }

    pub fn with_stop_sequences<I, S>(mut self, stop_sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_sequences = stop_sequences.into_iter().map(Into::into).collect();
        self
    }

    /// Fill an unset temperature with `default` so every later read sees the
    /// same value. An explicit temperature is left untouched.
    pub fn with_default_temperature(mut self, default: f64) -> Self {
        if self.temperature.is_none() {
            self.temperature = Some(default);
        }
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Stored temperature, or [`DEFAULT_TEMPERATURE`] when unset. Never absent.
    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Whether the caller set a temperature explicitly.
    pub fn has_explicit_temperature(&self) -> bool {
        self.temperature.is_some()
    }

    pub fn top_p(&self) -> Option<f64> {
        self.top_p
    }

    pub fn max_response_tokens(&self) -> Option<u32> {
        self.max_response_tokens
    }

    pub fn stop_sequences(&self) -> &[String] {
        &self.stop_sequences
    }

    /// True iff at least one custom stop sequence is set. Adapters only emit
    /// the stop-sequence field when this holds.
    pub fn has_stop_sequences(&self) -> bool {
        !self.stop_sequences.is_empty()
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl FromStr for GenerationParams {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}
