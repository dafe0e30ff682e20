//! Amazon Bedrock HTTP error classification.
//!
//! The Bedrock runtime endpoints usually return JSON error bodies shaped like:
//! `{ "message": "...", "__type": "..." }`. This module keeps the provider error
//! message lossless when possible; the `__type` code and raw body end up in
//! the error details.

use crate::error::LlmError;

fn extract_message(json: &serde_json::Value) -> Option<String> {
    let message = json
        .get("message")
        .and_then(|v| v.as_str())
        .or_else(|| json.get("Message").and_then(|v| v.as_str()))
        .or_else(|| json.get("errorMessage").and_then(|v| v.as_str()))
        .or_else(|| {
            json.get("error")
                .and_then(|v| v.get("message"))
                .and_then(|v| v.as_str())
        })
        .map(|s| s.trim().to_string())?;

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

fn extract_error_type(json: &serde_json::Value) -> Option<String> {
    json.get("__type")
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Turn a non-success Bedrock response into an [`LlmError::ApiError`].
pub fn classify_bedrock_http_error(status: u16, body_text: &str) -> LlmError {
    let json = serde_json::from_str::<serde_json::Value>(body_text).ok();

    let message = json
        .as_ref()
        .and_then(extract_message)
        .unwrap_or_else(|| {
            let trimmed = body_text.trim();
            if trimmed.is_empty() {
                format!("Bedrock returned HTTP {status} with an empty body")
            } else {
                trimmed.to_string()
            }
        });

    let error_type = json.as_ref().and_then(extract_error_type);
    let message = match error_type {
        Some(ref t) => format!("{t}: {message}"),
        None => message,
    };

    LlmError::ApiError {
        code: status,
        message,
        details: json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_exception_keeps_message_and_type() {
        let body = r#"{"__type":"ValidationException","message":"temperature must be <= 1"}"#;
        match classify_bedrock_http_error(400, body) {
            LlmError::ApiError {
                code,
                message,
                details,
            } => {
                assert_eq!(code, 400);
                assert_eq!(message, "ValidationException: temperature must be <= 1");
                assert!(details.is_some());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn alternative_message_keys() {
        let err = classify_bedrock_http_error(403, r#"{"Message":"User is not authorized"}"#);
        assert_eq!(err.to_string(), "API error 403: User is not authorized");

        let err = classify_bedrock_http_error(500, r#"{"error":{"message":"boom"}}"#);
        assert_eq!(err.to_string(), "API error 500: boom");
    }

    #[test]
    fn non_json_and_empty_bodies() {
        let err = classify_bedrock_http_error(502, "Bad Gateway");
        assert_eq!(err.status_code(), Some(502));
        assert!(err.to_string().contains("Bad Gateway"));

        let err = classify_bedrock_http_error(503, "   ");
        assert!(err.to_string().contains("empty body"));
        assert!(err.is_transport_error());
    }
}
