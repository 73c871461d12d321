//! Human-readable text output.

use crate::domain::ProcessingResult;
use crate::words::join_with_commas;
use console::style;

pub const TITLE: &str = "=== Word Pipeline ===";

/// Trailing explanation printed after every text-mode result.
pub const CAPABILITIES: &str = "\
This demonstrates:
- Library composition (words, render, config modules)
- External deps (clap, serde_json, serde_yaml, figment, tracing)
- Data dependencies (config files resolved through fallback tiers)
- Layer separation (config/domain/application)";

/// README content longer than this many characters is cut short.
pub const README_PREVIEW_CHARS: usize = 50;

pub fn render_text(
    result: &ProcessingResult,
    config_summary: &str,
    readme: Option<&str>,
) -> String {
    let stats = result.stats();
    let mut out = String::new();

    out.push_str(&format!("{}\n", style(TITLE).bold().green()));
    out.push_str(&format!("Message: {}\n", result.message()));
    out.push_str(&format!("Words: {}\n", join_with_commas(result.words())));
    out.push_str(&format!("Word count: {}\n", result.word_count()));
    out.push_str(&format!(
        "Word stats: mean={:.2}, max={}, min={}\n",
        stats.mean_length, stats.max_length, stats.min_length
    ));
    out.push_str(&format!("Config: {}\n", config_summary));
    out.push('\n');
    out.push_str(CAPABILITIES);
    out.push('\n');
    if let Some(readme) = readme {
        out.push_str(&readme_line(readme));
        out.push('\n');
    }
    out
}

fn readme_line(readme: &str) -> String {
    if readme.chars().count() > README_PREVIEW_CHARS {
        let preview: String = readme.chars().take(README_PREVIEW_CHARS).collect();
        format!("- README content: {}...", preview)
    } else {
        format!("- README: {}", readme)
    }
}
