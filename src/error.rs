//! Typed errors for config loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is missing or could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but holds no non-blank line.
    #[error("config file {} is empty", .path.display())]
    Empty { path: PathBuf },

    /// The tool's own settings could not be extracted.
    #[error("invalid settings: {0}")]
    Settings(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Settings(Box::new(err))
    }
}
