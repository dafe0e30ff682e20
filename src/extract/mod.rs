//! Document-to-text extraction.
//!
//! Converting rich documents (PDF, Word, ...) to text is an external
//! concern. The orchestrator only depends on the [`TextExtractor`] trait;
//! [`PlainTextExtractor`] covers documents that already are text and refuses
//! everything else.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::utils::mime::{guess_mime, is_text_like};

/// An opaque binary document handed to an extractor.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub bytes: Vec<u8>,
    /// Declared MIME type, if known.
    pub mime_type: Option<String>,
    pub file_name: Option<String>,
}

impl Document {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: None,
            file_name: None,
        }
    }

    /// A `text/plain` document holding `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(text.into().into_bytes()).with_mime_type("text/plain")
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Best-effort MIME type: declared, sniffed, then by file name.
    pub fn detected_mime_type(&self) -> String {
        guess_mime(
            self.mime_type.as_deref(),
            &self.bytes,
            self.file_name.as_deref(),
        )
    }
}

/// Extract plain text from a document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Failures must be reported as [`LlmError::ExtractionFailed`].
    async fn extract_text(&self, document: &Document) -> Result<String, LlmError>;
}

/// Extractor for documents that are already text (UTF-8).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract_text(&self, document: &Document) -> Result<String, LlmError> {
        let mime = document.detected_mime_type();
        let undeclared_binary = mime == "application/octet-stream";
        if !is_text_like(&mime) && !undeclared_binary {
            return Err(LlmError::ExtractionFailed(format!(
                "no text converter available for '{mime}'"
            )));
        }

        let bytes = document
            .bytes
            .strip_prefix(b"\xEF\xBB\xBF")
            .unwrap_or(&document.bytes[..]);
        let text = std::str::from_utf8(bytes).map_err(|e| {
            LlmError::ExtractionFailed(format!("document is not valid UTF-8 text: {e}"))
        })?;

        Ok(text.to_string())
    }
}

/// Replace NUL characters, which some converters leave behind, with spaces.
pub fn sanitize_extracted_text(text: String) -> String {
    if text.contains('\0') {
        text.replace('\0', " ")
    } else {
        text
    }
}
