//! Command-line interface for word-pipeline
//!
//! Parses flags, loads settings and config, runs the word pipeline and writes
//! the rendered result to standard output.

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_readme, ConfigLoader, Settings};
use crate::domain::{CliOptions, OutputFormat};
use crate::render::render;
use crate::words::process_message;

/// Split, reverse and render the words of a message
#[derive(Parser, Debug)]
#[command(name = "word-pipeline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Message to process
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Output as JSON
    #[arg(short, long, conflicts_with = "format")]
    json: bool,

    /// Reverse word order
    #[arg(short, long)]
    reverse: bool,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, env = "WORD_PIPELINE_VERBOSE")]
    verbose: bool,
}

impl Cli {
    /// Resolve the flags against the configured default message.
    pub fn into_options(self, default_message: &str) -> CliOptions {
        let format = if self.json { OutputFormat::Json } else { self.format.unwrap_or_default() };
        CliOptions {
            message: self.message.unwrap_or_else(|| default_message.to_string()),
            format,
            reverse: self.reverse,
        }
    }
}

/// Process entry point.
pub fn run() -> ExitCode {
    let stdout = std::io::stdout();
    let code = run_from(std::env::args_os(), &mut stdout.lock());
    ExitCode::from(code)
}

/// Run with explicit arguments (including the program name) and output sink.
///
/// Returns the process exit code: 0 on success, the parser's code (2) on bad
/// arguments, 1 on any other failure.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version land here too, with exit code 0.
            let _ = err.print();
            return u8::try_from(err.exit_code()).unwrap_or(1);
        }
    };

    init_tracing(cli.verbose);

    match execute(cli, out) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("Application failed: {:#}", e);
            1
        }
    }
}

fn init_tracing(verbose: bool) {
    // RUST_LOG in the environment always takes precedence; the level only
    // applies when it is unset.
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;
    tracing::debug!(?settings, "Resolved settings");

    let config = ConfigLoader::from_settings(&settings).load();
    tracing::info!("Config loaded: {}", config.summary());
    if let Some(environment) = config.get("environment") {
        tracing::debug!(environment, "Config environment");
    }

    let options = cli.into_options(&settings.default_message);
    tracing::debug!(?options, "Parsed options");

    let readme = load_readme(&settings.readme_path);

    let result = process_message(&options.message, options.reverse);
    let rendered = render(&result, config.summary(), readme.as_deref(), options.format)?;

    writeln!(out, "{}", rendered.trim_end_matches('\n')).context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
