//! Client configuration.
//!
//! Defaults (region, model, temperature) are plain values carried by
//! [`BedrockConfig`]; nothing here is process-wide state.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::models;
use crate::params::DEFAULT_TEMPERATURE;

/// AWS regions serving the Bedrock runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-west-2")]
    UsWest2,
    #[serde(rename = "ca-central-1")]
    CaCentral1,
    #[serde(rename = "sa-east-1")]
    SaEast1,
    #[serde(rename = "eu-central-1")]
    EuCentral1,
    #[serde(rename = "eu-west-1")]
    EuWest1,
    #[serde(rename = "eu-west-2")]
    EuWest2,
    #[serde(rename = "eu-west-3")]
    EuWest3,
    #[serde(rename = "ap-south-1")]
    ApSouth1,
    #[serde(rename = "ap-northeast-1")]
    ApNortheast1,
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
    #[serde(rename = "ap-southeast-2")]
    ApSoutheast2,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Region::UsEast1,
        Region::UsWest2,
        Region::CaCentral1,
        Region::SaEast1,
        Region::EuCentral1,
        Region::EuWest1,
        Region::EuWest2,
        Region::EuWest3,
        Region::ApSouth1,
        Region::ApNortheast1,
        Region::ApSoutheast1,
        Region::ApSoutheast2,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsWest2 => "us-west-2",
            Region::CaCentral1 => "ca-central-1",
            Region::SaEast1 => "sa-east-1",
            Region::EuCentral1 => "eu-central-1",
            Region::EuWest1 => "eu-west-1",
            Region::EuWest2 => "eu-west-2",
            Region::EuWest3 => "eu-west-3",
            Region::ApSouth1 => "ap-south-1",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::ApSoutheast2 => "ap-southeast-2",
        }
    }

    /// Bedrock runtime endpoint for this region.
    pub fn runtime_endpoint(&self) -> String {
        format!("https://bedrock-runtime.{}.amazonaws.com", self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == needle)
            .ok_or_else(|| {
                LlmError::ConfigurationError(format!("Unsupported Bedrock region: '{s}'"))
            })
    }
}

/// Configuration for [`crate::client::BedrockClient`].
#[derive(Clone)]
pub struct BedrockConfig {
    pub region: Region,
    /// Model used when a request does not name one.
    pub model_id: String,
    /// Bedrock API key, sent as a bearer token.
    pub api_key: Option<SecretString>,
    /// Overrides the regional runtime endpoint (proxies, tests).
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
    /// Temperature applied when the parameters leave it unset.
    pub default_temperature: f64,
    /// Extra headers added to every request (e.g. pre-signed auth headers).
    pub http_headers: HashMap<String, String>,
}

impl BedrockConfig {
    pub fn new() -> Self {
        Self {
            region: Region::default(),
            model_id: models::DEFAULT_MODEL.to_string(),
            api_key: None,
            base_url: None,
            timeout: None,
            default_temperature: DEFAULT_TEMPERATURE,
            http_headers: HashMap::new(),
        }
    }

    /// Read configuration from the environment:
    ///
    /// - `AWS_REGION` / `AWS_DEFAULT_REGION`
    /// - `BEDROCK_MODEL_ID`
    /// - `AWS_BEARER_TOKEN_BEDROCK`
    /// - `BEDROCK_BASE_URL`
    /// - `BEDROCK_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// [`from_env`](Self::from_env) over an arbitrary variable source. Blank
    /// values count as unset.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::new();

        if let Some(region) = env_var("AWS_REGION").or_else(|| env_var("AWS_DEFAULT_REGION")) {
            config.region = region.parse()?;
        }
        if let Some(model_id) = env_var("BEDROCK_MODEL_ID") {
            config = config.with_model_id(model_id);
        }
        if let Some(key) = env_var("AWS_BEARER_TOKEN_BEDROCK") {
            config = config.with_api_key(key);
        }
        if let Some(url) = env_var("BEDROCK_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Some(secs) = env_var("BEDROCK_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid BEDROCK_TIMEOUT_SECS '{secs}': {e}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Set the default model. A blank id is ignored and the current one kept.
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            tracing::warn!(current = %self.model_id, "blank model id ignored");
        } else {
            self.model_id = model_id;
        }
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_default_temperature(mut self, temperature: f64) -> Self {
        self.default_temperature = temperature;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_headers.insert(name.into(), value.into());
        self
    }

    /// Endpoint requests are sent to, without a trailing slash.
    pub fn endpoint(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => self.region.runtime_endpoint(),
        }
    }

    pub(crate) fn api_key_value(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret())
            .filter(|k| !k.trim().is_empty())
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BedrockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BedrockConfig")
            .field("region", &self.region)
            .field("model_id", &self.model_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_temperature", &self.default_temperature)
            .field("http_headers", &self.http_headers.keys().collect::<Vec<_>>())
            .finish()
    }
}
