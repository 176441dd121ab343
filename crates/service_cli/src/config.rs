//! CLI settings.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::Result;

/// Default settings file, looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "curves";

/// Main application settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// General configuration
    #[serde(default)]
    pub general: GeneralSettings,
    /// Build engine configuration
    #[serde(default)]
    pub engine: EngineSettings,
}

impl Settings {
    /// Load settings from a file and environment variables.
    ///
    /// Sources, later overriding earlier:
    /// 1. `path` (or `curves.toml`), if it exists
    /// 2. Environment variables prefixed with `CURVES__`, e.g.
    ///    `CURVES__GENERAL__LOG_LEVEL=debug`
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(path.unwrap_or(DEFAULT_SETTINGS_FILE)).required(false))
            .add_source(Environment::with_prefix("CURVES").separator("__"))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }
}

/// General configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct GeneralSettings {
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Reference-data store used when `--store` is not given
    #[serde(default)]
    pub store: Option<PathBuf>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            store: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Build engine configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    /// Thread pool size for batch builds
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Whether batch builds run in parallel
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            parallel: default_parallel(),
        }
    }
}

fn default_threads() -> usize {
    num_cpus::get()
}

fn default_parallel() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.engine.threads > 0);
        assert!(settings.engine.parallel);
        assert_eq!(settings.general.log_level, "info");
        assert!(settings.general.store.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::builder()
            .add_source(File::from_str(
                "[general]\nstore = \"data/store.toml\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let settings: Settings = config.try_deserialize().unwrap();
        assert_eq!(
            settings.general.store,
            Some(PathBuf::from("data/store.toml"))
        );
        assert_eq!(settings.general.log_level, "info");
        assert!(settings.engine.threads > 0);
    }
}
