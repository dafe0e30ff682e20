//! Anthropic Claude text-completion adapter.
//!
//! Reference: <https://docs.aws.amazon.com/bedrock/latest/userguide/model-parameters-claude.html>
//!
//! The completion API requires the prompt to be wrapped in Human/Assistant
//! turns and always needs `max_tokens_to_sample`. The wrapped prompt reads
//! `"Human: \n\n<prompt>\n\nAssistant: "`; the blank line after `Human: `
//! is only added when the prompt does not already start with one.

use serde_json::{Map, Value, json};

use super::{ModelAdapter, ModelFamily, required_str};
use crate::error::LlmError;
use crate::params::GenerationParams;

/// `max_tokens_to_sample` sent when the caller did not set a limit.
pub const DEFAULT_MAX_TOKENS_TO_SAMPLE: u32 = 1024;

const HUMAN_TURN: &str = "Human: ";
const ASSISTANT_TURN: &str = "\n\nAssistant: ";
const TURN_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeAdapter;

impl ClaudeAdapter {
    pub const fn new() -> Self {
        Self
    }

    /// Wrap a prompt in Human/Assistant turns, forcing the blank line the
    /// completion API expects before the human text.
    pub fn wrap_prompt(prompt: &str) -> String {
        let separator = if prompt.starts_with(TURN_SEPARATOR) {
            ""
        } else {
            TURN_SEPARATOR
        };
        format!("{HUMAN_TURN}{separator}{prompt}{ASSISTANT_TURN}")
    }
}

impl ModelAdapter for ClaudeAdapter {
    fn family(&self) -> ModelFamily {
        ModelFamily::Claude
    }

    fn build_request(&self, params: &GenerationParams) -> Result<Value, LlmError> {
        let mut body = Map::new();
        body.insert(
            "prompt".to_string(),
            json!(Self::wrap_prompt(params.prompt())),
        );
        body.insert("temperature".to_string(), json!(params.temperature()));
        if let Some(top_p) = params.top_p() {
            body.insert("top_p".to_string(), json!(top_p));
        }
        body.insert(
            "max_tokens_to_sample".to_string(),
            json!(
                params
                    .max_response_tokens()
                    .unwrap_or(DEFAULT_MAX_TOKENS_TO_SAMPLE)
            ),
        );
        if params.has_stop_sequences() {
            body.insert("stop_sequences".to_string(), json!(params.stop_sequences()));
        }

        Ok(Value::Object(body))
    }

    fn parse_response(&self, body: &Value) -> Result<String, LlmError> {
        if let Some(reason) = body.get("stop_reason").and_then(Value::as_str) {
            tracing::debug!(stop_reason = reason, "claude completion received");
        }
        required_str(ModelFamily::Claude, body, "completion").map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_forces_separator_and_default_max_tokens() {
        let params = GenerationParams::new("Hi").with_temperature(0.5);
        let body = ClaudeAdapter::new().build_request(&params).unwrap();
        assert_eq!(
            body,
            json!({
                "prompt": "Human: \n\nHi\n\nAssistant: ",
                "temperature": 0.5,
                "max_tokens_to_sample": 1024
            })
        );
    }

    #[test]
    fn prompt_already_starting_with_separator_is_not_doubled() {
        assert_eq!(
            ClaudeAdapter::wrap_prompt("\n\nHi"),
            "Human: \n\nHi\n\nAssistant: "
        );
        assert_eq!(
            ClaudeAdapter::wrap_prompt("\nHi"),
            "Human: \n\n\nHi\n\nAssistant: "
        );
    }

    #[test]
    fn full_request_uses_snake_case_fields() {
        let params = GenerationParams::new("Q")
            .with_temperature(0.1)
            .with_top_p(0.9)
            .with_max_response_tokens(300)
            .with_stop_sequences(["\n\nHuman:"]);
        let body = ClaudeAdapter::new().build_request(&params).unwrap();
        assert_eq!(
            body,
            json!({
                "prompt": "Human: \n\nQ\n\nAssistant: ",
                "temperature": 0.1,
                "top_p": 0.9,
                "max_tokens_to_sample": 300,
                "stop_sequences": ["\n\nHuman:"]
            })
        );
    }

    #[test]
    fn top_p_from_payload_surfaces_as_top_p() {
        let params = GenerationParams::from_json_str(r#"{"topP": 0.75}"#).unwrap();
        let body = ClaudeAdapter::new().build_request(&params).unwrap();
        assert_eq!(body["top_p"], json!(0.75));
        assert!(body.get("topP").is_none());
    }

    #[test]
    fn parses_completion() {
        let body = json!({ "completion": "abc", "stop_reason": "stop_sequence" });
        assert_eq!(ClaudeAdapter::new().parse_response(&body).unwrap(), "abc");
    }

    #[test]
    fn missing_completion_is_malformed() {
        let err = ClaudeAdapter::new()
            .parse_response(&json!({ "results": [{ "outputText": "abc" }] }))
            .unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[test]
    fn non_string_completion_is_malformed() {
        for completion in [json!(42), json!(null), json!(["abc"])] {
            let err = ClaudeAdapter::new()
                .parse_response(&json!({ "completion": completion }))
                .unwrap_err();
            assert!(matches!(err, LlmError::MalformedResponse(_)));
        }
    }
}
