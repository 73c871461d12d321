//! Config file loading through an ordered chain of fallback tiers

use super::runfiles::Runfiles;
use super::settings::{ResolutionStrategy, Settings};
use crate::domain::Config;
use crate::error::ConfigError;
use crate::utils::read_text;
use std::fmt;
use std::iter;
use std::path::{Path, PathBuf};

/// Content of the synthetic last tier.
pub const DEFAULT_CONFIG: &str = "version=1.0.0\nenvironment=default\n";

/// One candidate origin for the config text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given explicitly through settings.
    Explicit(PathBuf),
    /// Path resolved through the runfiles tree or manifest.
    Runfiles(PathBuf),
    /// Path relative to the running executable.
    ExecutableDir(PathBuf),
    /// Path relative to the working directory, as laid out in the source tree.
    BuildTree(PathBuf),
    /// Built-in default; always succeeds.
    Embedded,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p)
            | ConfigSource::Runfiles(p)
            | ConfigSource::ExecutableDir(p)
            | ConfigSource::BuildTree(p) => Some(p),
            ConfigSource::Embedded => None,
        }
    }

    fn read(&self) -> Result<Config, ConfigError> {
        let Some(path) = self.path() else {
            return Ok(Config::embedded());
        };

        let decoded = read_text(path)
            .map_err(|source| ConfigError::Unreadable { path: path.to_path_buf(), source })?;
        Config::from_content(self.clone(), &decoded.content)
            .ok_or_else(|| ConfigError::Empty { path: path.to_path_buf() })
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "explicit path {}", p.display()),
            ConfigSource::Runfiles(p) => write!(f, "runfiles {}", p.display()),
            ConfigSource::ExecutableDir(p) => write!(f, "executable dir {}", p.display()),
            ConfigSource::BuildTree(p) => write!(f, "build tree {}", p.display()),
            ConfigSource::Embedded => write!(f, "embedded default"),
        }
    }
}

/// Tries each tier in order; the first that yields a non-empty config wins.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    tiers: Vec<ConfigSource>,
}

impl ConfigLoader {
    pub fn new(tiers: Vec<ConfigSource>) -> Self {
        Self { tiers }
    }

    /// Build the tier list described by `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut tiers = Vec::with_capacity(2);
        match primary_source(settings) {
            Some(source) => tiers.push(source),
            None => tracing::debug!(
                strategy = ?settings.resolution,
                "Primary config path could not be resolved; skipping tier"
            ),
        }
        tiers.push(ConfigSource::BuildTree(settings.build_path.clone()));
        Self::new(tiers)
    }

    pub fn tiers(&self) -> &[ConfigSource] {
        &self.tiers
    }

    /// Load the config. Never fails: the embedded default is always tried last.
    pub fn load(&self) -> Config {
        for source in self.tiers.iter().chain(iter::once(&ConfigSource::Embedded)) {
            match source.read() {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", source);
                    return config;
                }
                Err(e) => tracing::debug!("Config tier unavailable: {}", e),
            }
        }
        Config::embedded()
    }
}

fn primary_source(settings: &Settings) -> Option<ConfigSource> {
    if let Some(path) = &settings.config_path {
        return Some(ConfigSource::Explicit(path.clone()));
    }
    match settings.resolution {
        ResolutionStrategy::Runfiles => Runfiles::from_env()
            .and_then(|runfiles| runfiles.rlocation(&settings.runfiles_path))
            .map(ConfigSource::Runfiles),
        ResolutionStrategy::ExecutableDir => {
            let exe = std::env::current_exe().ok()?;
            let dir = exe.parent()?;
            Some(ConfigSource::ExecutableDir(dir.join(&settings.build_path)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn falls_back_to_embedded_when_all_paths_missing() {
        let tmp = TempDir::new().expect("tmp");
        let loader = ConfigLoader::new(vec![
            ConfigSource::Runfiles(tmp.path().join("missing/app.config")),
            ConfigSource::BuildTree(tmp.path().join("also-missing.config")),
        ]);

        let cfg = loader.load();
        assert_eq!(cfg.source(), &ConfigSource::Embedded);
        assert_eq!(cfg.lines(), ["version=1.0.0", "environment=default"]);
        assert_eq!(cfg.summary(), "version=1.0.0");
        assert_eq!(cfg.get("environment"), Some("default"));
    }

    #[test]
    fn first_readable_tier_wins() {
        let tmp = TempDir::new().expect("tmp");
        let primary = tmp.path().join("primary.config");
        let secondary = tmp.path().join("secondary.config");
        fs::write(&primary, "version=9.9.9\nenvironment=prod\n").expect("write primary");
        fs::write(&secondary, "version=0.0.1\n").expect("write secondary");

        let loader = ConfigLoader::new(vec![
            ConfigSource::Explicit(primary.clone()),
            ConfigSource::BuildTree(secondary),
        ]);
        let cfg = loader.load();
        assert_eq!(cfg.source(), &ConfigSource::Explicit(primary));
        assert_eq!(cfg.summary(), "version=9.9.9");
    }

    #[test]
    fn missing_primary_falls_through_to_secondary() {
        let tmp = TempDir::new().expect("tmp");
        let secondary = tmp.path().join("secondary.config");
        fs::write(&secondary, "version=0.0.1\n").expect("write secondary");

        let loader = ConfigLoader::new(vec![
            ConfigSource::Runfiles(tmp.path().join("missing.config")),
            ConfigSource::BuildTree(secondary.clone()),
        ]);
        let cfg = loader.load();
        assert_eq!(cfg.source(), &ConfigSource::BuildTree(secondary));
        assert_eq!(cfg.summary(), "version=0.0.1");
    }

    #[test]
    fn empty_file_is_skipped() {
        let tmp = TempDir::new().expect("tmp");
        let empty = tmp.path().join("empty.config");
        fs::write(&empty, "\n  \n").expect("write empty");

        let cfg = ConfigLoader::new(vec![ConfigSource::BuildTree(empty)]).load();
        assert_eq!(cfg.source(), &ConfigSource::Embedded);
    }

    #[test]
    fn directory_path_is_unreadable() {
        let tmp = TempDir::new().expect("tmp");
        let err = ConfigSource::BuildTree(tmp.path().to_path_buf()).read().unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
    }

    #[test]
    fn explicit_path_takes_primary_slot() {
        let settings = Settings {
            config_path: Some(PathBuf::from("/etc/word-pipeline/app.config")),
            ..Settings::default()
        };
        let loader = ConfigLoader::from_settings(&settings);
        assert_eq!(
            loader.tiers(),
            [
                ConfigSource::Explicit(PathBuf::from("/etc/word-pipeline/app.config")),
                ConfigSource::BuildTree(PathBuf::from("config/app.config")),
            ]
        );
    }

    #[test]
    fn executable_dir_strategy_resolves_next_to_binary() {
        let settings =
            Settings { resolution: ResolutionStrategy::ExecutableDir, ..Settings::default() };
        let loader = ConfigLoader::from_settings(&settings);
        let exe_dir = std::env::current_exe().expect("exe").parent().expect("dir").to_path_buf();

        assert_eq!(loader.tiers().len(), 2);
        assert_eq!(
            loader.tiers()[0],
            ConfigSource::ExecutableDir(exe_dir.join("config/app.config"))
        );
    }

    #[test]
    fn source_labels_name_the_origin() {
        assert_eq!(ConfigSource::Embedded.to_string(), "embedded default");
        assert_eq!(
            ConfigSource::BuildTree(PathBuf::from("config/app.config")).to_string(),
            "build tree config/app.config"
        );
    }
}
