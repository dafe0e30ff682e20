//! Tracing subscriber setup
//!
//! The library only emits `tracing` events and spans; installing a
//! subscriber is left to the application. [`init_tracing`] is a ready-made
//! one covering the common cases.
//!
//! ```rust,ignore
//! use bedrock_genai::observability::{TracingConfig, init_tracing};
//!
//! let _guard = init_tracing(&TracingConfig::development())?;
//! ```

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::error::LlmError;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Subscriber configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level applied to this crate when `RUST_LOG` is not set.
    pub level: tracing::Level,
    pub format: OutputFormat,
    /// Include span open/close events.
    pub span_events: bool,
    /// Write to daily rolling files in this directory instead of stdout.
    pub log_dir: Option<PathBuf>,
    /// File name prefix for rolling files.
    pub file_prefix: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            format: OutputFormat::Text,
            span_events: false,
            log_dir: None,
            file_prefix: "bedrock-genai.log".to_string(),
        }
    }
}

impl TracingConfig {
    /// Verbose text output for local work.
    pub fn development() -> Self {
        Self {
            level: tracing::Level::DEBUG,
            span_events: true,
            ..Default::default()
        }
    }

    /// Warnings and errors only.
    pub fn minimal() -> Self {
        Self {
            level: tracing::Level::WARN,
            ..Default::default()
        }
    }

    /// JSON lines at info level.
    pub fn json_production() -> Self {
        Self {
            level: tracing::Level::INFO,
            format: OutputFormat::Json,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> String {
        format!(
            "bedrock_genai={}",
            self.level.as_str().to_ascii_lowercase()
        )
    }
}

/// Install a global subscriber for `config`.
///
/// Returns the file writer's guard when `log_dir` is set; it must be kept
/// alive for buffered lines to be flushed. When a global subscriber is
/// already installed this does nothing and returns `Ok(None)`.
pub fn init_tracing(config: &TracingConfig) -> Result<Option<WorkerGuard>, LlmError> {
    if tracing::dispatcher::has_been_set() {
        tracing::debug!("global subscriber already installed, keeping it");
        return Ok(None);
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.default_directive()))
        .map_err(|e| LlmError::ConfigurationError(format!("Invalid log filter: {e}")))?;

    let (writer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let ansi = config.log_dir.is_none();

    let result = match config.format {
        OutputFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .with_span_events(span_events)
            .try_init(),
        OutputFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_span_events(span_events)
            .try_init(),
    };

    result
        .map(|()| guard)
        .map_err(|e| LlmError::ConfigurationError(format!("Failed to initialize tracing: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let dev = TracingConfig::development();
        assert_eq!(dev.level, tracing::Level::DEBUG);
        assert!(dev.span_events);

        assert_eq!(TracingConfig::minimal().level, tracing::Level::WARN);
        assert_eq!(TracingConfig::json_production().format, OutputFormat::Json);
    }

    #[test]
    fn directive_targets_this_crate() {
        assert_eq!(
            TracingConfig::minimal().default_directive(),
            "bedrock_genai=warn"
        );
    }

    #[test]
    fn repeated_init_is_tolerated() {
        let first = init_tracing(&TracingConfig::minimal());
        assert!(first.is_ok());
        assert!(tracing::dispatcher::has_been_set());

        let dir = std::env::temp_dir().join("bedrock-genai-init-twice");
        let second = init_tracing(&TracingConfig {
            log_dir: Some(dir),
            ..TracingConfig::minimal()
        });
        assert!(matches!(second, Ok(None)));
    }
}
