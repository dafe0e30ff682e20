//! Parameter Management Module
//!
//! Holds the backend-agnostic generation parameters. Adapters in
//! [`crate::adapters`] map them onto each model family's wire format; no
//! range validation happens here, the backend is authoritative on ranges.

pub mod generation;

pub use generation::{DEFAULT_TEMPERATURE, GenerationParams};
