//! Tool settings layered from defaults, an optional settings file and the environment
//!
//! Precedence: Env (`WORD_PIPELINE_*`) > `word-pipeline.yaml` > `word-pipeline.toml` > Defaults.

use crate::error::ConfigError;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "WORD_PIPELINE_";
pub const SETTINGS_TOML: &str = "word-pipeline.toml";
pub const SETTINGS_YAML: &str = "word-pipeline.yaml";

pub const DEFAULT_MESSAGE: &str =
    "Hello from the word pipeline demo with third-party dependencies";

/// How the primary (deployment) config path is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionStrategy {
    /// Look up `runfiles_path` in the runfiles tree or manifest.
    #[default]
    Runfiles,
    /// Join `build_path` onto the directory holding the executable.
    ExecutableDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub resolution: ResolutionStrategy,
    /// Replaces the strategy-resolved primary path when set.
    pub config_path: Option<PathBuf>,
    pub runfiles_path: String,
    pub build_path: PathBuf,
    /// Runfiles path of the optional README shown in text output.
    pub readme_path: String,
    pub default_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: ResolutionStrategy::default(),
            config_path: None,
            runfiles_path: "_main/config/app.config".to_string(),
            build_path: PathBuf::from("config/app.config"),
            readme_path: "_main/resources/README.txt".to_string(),
            default_message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings, looking for settings files in the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        Self::figment(dir).merge(Env::prefixed(ENV_PREFIX)).extract().map_err(ConfigError::from)
    }

    /// Defaults and settings files, without the environment layer.
    fn figment(dir: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(dir.join(SETTINGS_TOML)))
            .merge(Yaml::file(dir.join(SETTINGS_YAML)))
    }
}
