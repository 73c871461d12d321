//! Core data types shared across the pipeline

use crate::config::{ConfigSource, DEFAULT_CONFIG};
use crate::words::{split_words, WordStats};

/// Lines of the config file that won the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    source: ConfigSource,
    lines: Vec<String>,
}

impl Config {
    /// Build a config from raw file content.
    ///
    /// Returns `None` when the content holds no non-blank line, so callers can
    /// move on to the next source.
    pub fn from_content(source: ConfigSource, content: &str) -> Option<Self> {
        let lines: Vec<String> = content.lines().map(|line| line.to_string()).collect();
        if lines.iter().all(|line| line.trim().is_empty()) {
            return None;
        }
        Some(Self { source, lines })
    }

    /// The built-in default config.
    pub fn embedded() -> Self {
        Self {
            source: ConfigSource::Embedded,
            lines: DEFAULT_CONFIG.lines().map(|line| line.to_string()).collect(),
        }
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// First line of the config, shown alongside the processed message.
    pub fn summary(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    /// Value of the first `key=value` line whose key matches.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| {
            let (k, v) = line.split_once('=')?;
            (k.trim() == key).then(|| v.trim())
        })
    }
}

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Options resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub message: String,
    pub format: OutputFormat,
    pub reverse: bool,
}

impl CliOptions {
    pub fn as_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// A message and the words it splits into.
///
/// The word count is always derived from `words`, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    message: String,
    words: Vec<String>,
}

impl ProcessingResult {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let words = split_words(&message);
        Self { message, words }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn stats(&self) -> WordStats {
        WordStats::from_words(self.words.as_slice())
    }
}
