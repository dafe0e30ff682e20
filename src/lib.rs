//! # bedrock-genai
//!
//! Single-shot text generation on Amazon Bedrock foundation models.
//!
#![deny(unsafe_code)]

//! Every Bedrock model family speaks its own JSON dialect. This crate hides
//! that behind per-family [`adapters`]: the caller supplies a prompt, an
//! optional piece of text (or a document to extract text from) and optional
//! generation parameters, and gets the model's text back.
//!
//! ## Features
//!
//! - **Model adapters**: Titan and Claude request/response formats, resolved
//!   by exact id or vendor prefix through [`registry::AdapterRegistry`].
//! - **Prompt composition**: source text is substituted at a marker or
//!   appended after a blank line.
//! - **Summaries**: English and French summary instructions with an optional
//!   sentence count.
//! - **Raw passthrough**: send a hand-built body to any model id.
//! - **Pluggable transport**: the HTTP layer is a trait; `reqwest` is the default.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bedrock_genai::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BedrockConfig::from_env()?;
//!     let generator = TextGenerator::from_config(config)?;
//!
//!     let request = GenerateRequest::new("Summarize the following text:")
//!         .with_text("Bedrock is a managed service for foundation models.")
//!         .with_model(models::TITAN_TEXT_EXPRESS_V1)
//!         .with_params(GenerationParams::default().with_temperature(0.5));
//!
//!     println!("{}", generator.generate(request).await?);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod observability;
pub mod orchestrator;
pub mod params;
pub mod registry;
pub mod transport;
pub mod utils;

pub use client::BedrockClient;
pub use config::{BedrockConfig, Region};
pub use error::LlmError;
pub use orchestrator::{GenerateRequest, SummarizeRequest, SummaryLanguage, TextGenerator};
pub use params::GenerationParams;

/// Common imports.
pub mod prelude {
    pub use crate::adapters::{ModelAdapter, ModelFamily};
    pub use crate::client::BedrockClient;
    pub use crate::config::{BedrockConfig, Region};
    pub use crate::error::LlmError;
    pub use crate::extract::{Document, PlainTextExtractor, TextExtractor};
    pub use crate::models;
    pub use crate::orchestrator::{
        GenerateRequest, SummarizeRequest, SummaryLanguage, TextGenerator, TextSource,
    };
    pub use crate::params::GenerationParams;
    pub use crate::registry::AdapterRegistry;
    pub use crate::transport::HttpTransport;
}
