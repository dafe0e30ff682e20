//! Summarization convenience wrapper.
//!
//! Builds a canned instruction in English or French, optionally asking for
//! a given number of sentences, and appends the text to summarize.

use std::fmt;

use super::{GenerateRequest, TextGenerator, TextSource};
use crate::error::LlmError;
use crate::extract::Document;
use crate::params::GenerationParams;

/// Language of the summary instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryLanguage {
    #[default]
    English,
    French,
}

impl SummaryLanguage {
    /// Map a language code to a template. `"fr"` (any case) selects French;
    /// any other code falls back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Self::French,
            "en" | "" => Self::English,
            other => {
                tracing::warn!(
                    language = other,
                    "no summary template for language, using English"
                );
                Self::English
            }
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }
}

impl fmt::Display for SummaryLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Summary instruction for `language`, asking for `sentence_count`
/// sentences when it is non-zero. The text to summarize goes after it,
/// separated by a blank line.
pub fn summary_prompt(language: SummaryLanguage, sentence_count: Option<u32>) -> String {
    let count = sentence_count.filter(|n| *n > 0);
    let plural = |n: u32| if n > 1 { "s" } else { "" };

    let mut prompt = match language {
        SummaryLanguage::English => {
            let mut p = String::from("Please summarize this text");
            if let Some(n) = count {
                p.push_str(&format!(" in {n} sentence{}", plural(n)));
            }
            p
        }
        SummaryLanguage::French => {
            let mut p = String::from("Merci de résumer ce texte");
            if let Some(n) = count {
                p.push_str(&format!(" en {n} phrase{}", plural(n)));
            }
            p
        }
    };
    prompt.push_str(" :");
    prompt
}

/// Input of [`TextGenerator::summarize`].
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    pub language: SummaryLanguage,
    pub sentence_count: Option<u32>,
    pub source: TextSource,
    pub model_id: Option<String>,
    pub params: Option<GenerationParams>,
}

impl SummarizeRequest {
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_source(TextSource::Text(text.into()))
    }

    pub fn document(document: Document) -> Self {
        Self::with_source(TextSource::Document(document))
    }

    fn with_source(source: TextSource) -> Self {
        Self {
            language: SummaryLanguage::default(),
            sentence_count: None,
            source,
            model_id: None,
            params: None,
        }
    }

    pub fn with_language(mut self, language: SummaryLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn with_sentence_count(mut self, count: u32) -> Self {
        self.sentence_count = Some(count);
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = Some(params);
        self
    }
}

impl TextGenerator {
    /// Summarize text or a document.
    pub async fn summarize(&self, request: SummarizeRequest) -> Result<String, LlmError> {
        if let TextSource::Text(text) = &request.source
            && text.trim().is_empty()
        {
            return Err(LlmError::InvalidInput(
                "text to summarize must not be blank".to_string(),
            ));
        }

        let mut generate = GenerateRequest::new(summary_prompt(
            request.language,
            request.sentence_count,
        ));
        generate.source = Some(request.source);
        generate.model_id = request.model_id;
        generate.params = request.params;

        tracing::debug!(
            language = %request.language,
            sentences = request.sentence_count,
            "summarizing"
        );
        self.generate(generate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_templates() {
        assert_eq!(
            summary_prompt(SummaryLanguage::English, None),
            "Please summarize this text :"
        );
        assert_eq!(
            summary_prompt(SummaryLanguage::English, Some(1)),
            "Please summarize this text in 1 sentence :"
        );
        assert_eq!(
            summary_prompt(SummaryLanguage::English, Some(3)),
            "Please summarize this text in 3 sentences :"
        );
    }

    #[test]
    fn french_templates() {
        assert_eq!(
            summary_prompt(SummaryLanguage::French, None),
            "Merci de résumer ce texte :"
        );
        assert_eq!(
            summary_prompt(SummaryLanguage::French, Some(1)),
            "Merci de résumer ce texte en 1 phrase :"
        );
        assert_eq!(
            summary_prompt(SummaryLanguage::French, Some(2)),
            "Merci de résumer ce texte en 2 phrases :"
        );
    }

    #[test]
    fn zero_sentences_is_ignored() {
        assert_eq!(
            summary_prompt(SummaryLanguage::English, Some(0)),
            summary_prompt(SummaryLanguage::English, None)
        );
    }

    #[test]
    fn language_codes() {
        assert_eq!(SummaryLanguage::from_code("FR"), SummaryLanguage::French);
        assert_eq!(SummaryLanguage::from_code("en"), SummaryLanguage::English);
        assert_eq!(SummaryLanguage::from_code("de"), SummaryLanguage::English);
    }
}
