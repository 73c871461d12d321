//! Output rendering (text, JSON, YAML)

pub mod structured;
pub mod text;

pub use structured::{render_json, render_yaml};
pub use text::render_text;

use crate::domain::{OutputFormat, ProcessingResult};
use anyhow::Result;

/// Render a processing result together with the config summary line.
///
/// The README excerpt only appears in text output.
pub fn render(
    result: &ProcessingResult,
    config_summary: &str,
    readme: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, config_summary, readme)),
        OutputFormat::Json => render_json(result, config_summary),
        OutputFormat::Yaml => render_yaml(result, config_summary),
    }
}
