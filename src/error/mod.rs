//! Error Handling Module
//!
//! This module provides the error type shared by every layer of the crate:
//! - Core error types (`LlmError`, `ErrorCategory`)
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use bedrock_genai::error::{ErrorCategory, LlmError};
//!
//! let error = LlmError::api_error(400, "Malformed input request");
//! assert_eq!(error.category(), ErrorCategory::Transport);
//! assert!(error.is_transport_error());
//! ```

mod conversions;
pub mod types;

pub use types::*;
