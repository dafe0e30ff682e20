//! Model Adapter System
//!
//! Bedrock has no shared wire schema across model families: each family
//! expects its own request body and returns its own response envelope. A
//! [`ModelAdapter`] owns one family's format in both directions. New families
//! are added by implementing the trait and registering the adapter in
//! [`crate::registry::AdapterRegistry`], never by branching on model ids.

use std::fmt;

use serde_json::Value;

use crate::error::LlmError;
use crate::params::GenerationParams;

pub mod claude;
pub mod titan;

pub use claude::{ClaudeAdapter, DEFAULT_MAX_TOKENS_TO_SAMPLE};
pub use titan::TitanAdapter;

/// Backend family a model id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ModelFamily {
    /// Amazon Titan text models (`results[].outputText` responses).
    Titan,
    /// Anthropic Claude text-completion models (`Human:`/`Assistant:` prompts).
    Claude,
    /// A family provided by an adapter outside this crate, named by it.
    Other(&'static str),
}

impl ModelFamily {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Titan => "titan",
            Self::Claude => "claude",
            Self::Other(name) => *name,
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translate generation parameters to and from one family's wire format.
///
/// Both operations are pure transforms: no I/O, no retries.
pub trait ModelAdapter: Send + Sync {
    fn family(&self) -> ModelFamily;

    /// Build the JSON request body sent to the `invoke` endpoint.
    fn build_request(&self, params: &GenerationParams) -> Result<Value, LlmError>;

    /// Extract the generated text from a response body.
    fn parse_response(&self, body: &Value) -> Result<String, LlmError>;
}

/// Read a required string field from a JSON object.
pub(crate) fn required_str<'a>(
    family: ModelFamily,
    value: &'a Value,
    field: &str,
) -> Result<&'a str, LlmError> {
    match value.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(LlmError::MalformedResponse(format!(
            "{family} response field '{field}' is not a string: {other}"
        ))),
        None => Err(LlmError::MalformedResponse(format!(
            "{family} response is missing the '{field}' field"
        ))),
    }
}
