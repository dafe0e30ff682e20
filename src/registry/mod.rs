//! Adapter registry
//!
//! Maps a Bedrock model id to the [`ModelAdapter`] that speaks its wire
//! format. Resolution is one rule applied to both directions of a call:
//! exact id first, then the longest registered prefix. Ids matching
//! neither are rejected before any network traffic.

use std::collections::HashMap;
use std::sync::Arc;

use crate::adapters::{ClaudeAdapter, ModelAdapter, ModelFamily, TitanAdapter};
use crate::error::LlmError;
use crate::models;

/// Registry of model adapters keyed by exact id and by id prefix.
#[derive(Clone)]
pub struct AdapterRegistry {
    by_id: HashMap<String, Arc<dyn ModelAdapter>>,
    by_prefix: Vec<(String, Arc<dyn ModelAdapter>)>,
}

impl AdapterRegistry {
    /// Registry with no adapters.
    pub fn empty() -> Self {
        Self {
            by_id: HashMap::new(),
            by_prefix: Vec::new(),
        }
    }

    /// Registry with the canonical Titan and Claude ids and their vendor
    /// prefixes.
    pub fn with_defaults() -> Self {
        let titan: Arc<dyn ModelAdapter> = Arc::new(TitanAdapter::new());
        let claude: Arc<dyn ModelAdapter> = Arc::new(ClaudeAdapter::new());

        let mut registry = Self::empty();
        registry.register_model(models::TITAN_TEXT_EXPRESS_V1, titan.clone());
        registry.register_model(models::CLAUDE_INSTANT_V1, claude.clone());
        registry.register_model(models::CLAUDE_V2, claude.clone());
        registry.register_prefix(models::TITAN_PREFIX, titan);
        registry.register_prefix(models::CLAUDE_PREFIX, claude);
        registry
    }

    /// Register an adapter for one exact model id, replacing any previous one.
    pub fn register_model(&mut self, model_id: impl Into<String>, adapter: Arc<dyn ModelAdapter>) {
        self.by_id.insert(model_id.into(), adapter);
    }

    /// Register an adapter for every model id starting with `prefix`.
    pub fn register_prefix(&mut self, prefix: impl Into<String>, adapter: Arc<dyn ModelAdapter>) {
        let prefix = prefix.into();
        self.by_prefix.retain(|(p, _)| *p != prefix);
        self.by_prefix.push((prefix, adapter));
    }

    /// Resolve the adapter for `model_id`.
    pub fn resolve(&self, model_id: &str) -> Result<Arc<dyn ModelAdapter>, LlmError> {
        let model_id = model_id.trim();
        if model_id.is_empty() {
            return Err(LlmError::UnsupportedModel(model_id.to_string()));
        }

        if let Some(adapter) = self.by_id.get(model_id) {
            return Ok(adapter.clone());
        }

        self.by_prefix
            .iter()
            .filter(|(prefix, _)| model_id.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, adapter)| {
                tracing::debug!(model_id, prefix = %prefix, "model resolved by prefix");
                adapter.clone()
            })
            .ok_or_else(|| LlmError::UnsupportedModel(model_id.to_string()))
    }

    /// Family of the adapter `model_id` resolves to.
    pub fn family_of(&self, model_id: &str) -> Result<ModelFamily, LlmError> {
        self.resolve(model_id).map(|adapter| adapter.family())
    }

    /// Exact ids registered, sorted.
    pub fn known_models(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_id.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn is_supported(&self, model_id: &str) -> bool {
        self.resolve(model_id).is_ok()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("models", &self.known_models())
            .field(
                "prefixes",
                &self
                    .by_prefix
                    .iter()
                    .map(|(p, _)| p.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
