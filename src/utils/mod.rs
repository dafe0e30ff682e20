//! Utility modules
//!
//! Small helpers shared by the extraction and orchestration layers.

pub mod mime;
