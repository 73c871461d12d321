//! JSON and YAML output.

use crate::domain::ProcessingResult;
use crate::words::WordStats;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Payload<'a> {
    message: &'a str,
    words: &'a [String],
    word_count: usize,
    word_stats: WordStats,
    config: &'a str,
}

impl<'a> Payload<'a> {
    fn new(result: &'a ProcessingResult, config_summary: &'a str) -> Self {
        Self {
            message: result.message(),
            words: result.words(),
            word_count: result.word_count(),
            word_stats: result.stats(),
            config: config_summary,
        }
    }
}

/// Pretty-printed JSON object with `message`, `words`, `wordCount`,
/// `wordStats` and `config` keys.
pub fn render_json(result: &ProcessingResult, config_summary: &str) -> Result<String> {
    serde_json::to_string_pretty(&Payload::new(result, config_summary))
        .context("Failed to serialize result as JSON")
}

pub fn render_yaml(result: &ProcessingResult, config_summary: &str) -> Result<String> {
    serde_yaml::to_string(&Payload::new(result, config_summary))
        .context("Failed to serialize result as YAML")
}
