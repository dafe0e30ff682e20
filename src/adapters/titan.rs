//! Amazon Titan text adapter.
//!
//! Reference: <https://docs.aws.amazon.com/bedrock/latest/userguide/model-parameters-titan-text.html>
//!
//! Request:
//! ```json
//! { "inputText": "...", "topP": 0.9,
//!   "textGenerationConfig": { "temperature": 0.5, "maxTokenCount": 100, "stopSequences": ["END"] } }
//! ```
//! `topP` sits at the top level, next to `inputText`, not inside
//! `textGenerationConfig`.
//!
//! Response:
//! ```json
//! { "inputTextTokenCount": 11,
//!   "results": [{ "tokenCount": 31, "outputText": "...", "completionReason": "FINISH" }] }
//! ```

use serde_json::{Map, Value, json};

use super::{ModelAdapter, ModelFamily, required_str};
use crate::error::LlmError;
use crate::params::GenerationParams;

#[derive(Debug, Clone, Copy, Default)]
pub struct TitanAdapter;

impl TitanAdapter {
    pub const fn new() -> Self {
        Self
    }
}

impl ModelAdapter for TitanAdapter {
    fn family(&self) -> ModelFamily {
        ModelFamily::Titan
    }

    fn build_request(&self, params: &GenerationParams) -> Result<Value, LlmError> {
        let mut config = Map::new();
        config.insert("temperature".to_string(), json!(params.temperature()));
        if let Some(max_tokens) = params.max_response_tokens() {
            config.insert("maxTokenCount".to_string(), json!(max_tokens));
        }
        if params.has_stop_sequences() {
            config.insert("stopSequences".to_string(), json!(params.stop_sequences()));
        }

        let mut body = Map::new();
        body.insert("inputText".to_string(), json!(params.prompt()));
        if let Some(top_p) = params.top_p() {
            body.insert("topP".to_string(), json!(top_p));
        }
        body.insert("textGenerationConfig".to_string(), Value::Object(config));

        Ok(Value::Object(body))
    }

    fn parse_response(&self, body: &Value) -> Result<String, LlmError> {
        let results = body
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                LlmError::malformed("titan response is missing the 'results' array")
            })?;

        let first = results
            .first()
            .ok_or_else(|| LlmError::malformed("titan response 'results' array is empty"))?;

        if let Some(reason) = first.get("completionReason").and_then(Value::as_str) {
            tracing::debug!(
                completion_reason = reason,
                candidates = results.len(),
                "titan completion received"
            );
        }

        required_str(ModelFamily::Titan, first, "outputText").map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_places_top_p_at_top_level() {
        let params = GenerationParams::new("X")
            .with_temperature(0.5)
            .with_top_p(0.9)
            .with_max_response_tokens(100)
            .with_stop_sequences(["END"]);

        let body = TitanAdapter::new().build_request(&params).unwrap();
        assert_eq!(
            body,
            json!({
                "inputText": "X",
                "topP": 0.9,
                "textGenerationConfig": {
                    "temperature": 0.5,
                    "maxTokenCount": 100,
                    "stopSequences": ["END"]
                }
            })
        );
    }

    #[test]
    fn request_omits_unset_optional_fields() {
        let body = TitanAdapter::new()
            .build_request(&GenerationParams::new("Hello"))
            .unwrap();
        assert_eq!(
            body,
            json!({
                "inputText": "Hello",
                "textGenerationConfig": { "temperature": 0.8 }
            })
        );
    }

    #[test]
    fn request_carries_top_p_parsed_from_payload() {
        let params = GenerationParams::from_json_str(r#"{"prompt": "q", "topP": 0.42}"#).unwrap();
        let body = TitanAdapter::new().build_request(&params).unwrap();
        assert_eq!(body["topP"], json!(0.42));
        assert!(body["textGenerationConfig"].get("topP").is_none());
    }

    #[test]
    fn parses_first_result() {
        let body = json!({
            "inputTextTokenCount": 11,
            "results": [
                { "tokenCount": 3, "outputText": "abc", "completionReason": "FINISH" },
                { "tokenCount": 3, "outputText": "def", "completionReason": "FINISH" }
            ]
        });
        assert_eq!(TitanAdapter::new().parse_response(&body).unwrap(), "abc");
    }

    #[test]
    fn empty_results_fail_instead_of_returning_empty_text() {
        let err = TitanAdapter::new()
            .parse_response(&json!({ "results": [] }))
            .unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[test]
    fn missing_results_or_output_text_are_malformed() {
        let adapter = TitanAdapter::new();
        assert!(matches!(
            adapter.parse_response(&json!({ "completion": "abc" })),
            Err(LlmError::MalformedResponse(_))
        ));
        assert!(matches!(
            adapter.parse_response(&json!({ "results": [{ "tokenCount": 1 }] })),
            Err(LlmError::MalformedResponse(_))
        ));
        assert!(matches!(
            adapter.parse_response(&json!({ "results": [{ "outputText": 7 }] })),
            Err(LlmError::MalformedResponse(_))
        ));
    }
}
