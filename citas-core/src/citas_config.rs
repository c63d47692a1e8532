//! Global citas configuration.

use std::path::{Path, PathBuf};

use chrono::Duration;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::backend::JsonFile;
use crate::error::{CitasError, CitasResult};
use crate::reminder::DEFAULT_THRESHOLD_HOURS;

static DEFAULT_DATA_FILE: &str = "~/.citas/citas.json";

/// Upper bound for `reminder_threshold_hours` (100 years).
pub const MAX_THRESHOLD_HOURS: i64 = 24 * 365 * 100;

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_threshold_hours() -> i64 {
    DEFAULT_THRESHOLD_HOURS
}

/// Configuration at ~/.config/citas/config.toml
///
/// Every key can also be set from the environment with a `CITAS_` prefix,
/// e.g. `CITAS_DATA_FILE=/tmp/citas.json`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CitasConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_threshold_hours")]
    pub reminder_threshold_hours: i64,
}

impl Default for CitasConfig {
    fn default() -> Self {
        CitasConfig {
            data_file: default_data_file(),
            reminder_threshold_hours: DEFAULT_THRESHOLD_HOURS,
        }
    }
}

impl CitasConfig {
    pub fn config_path() -> CitasResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CitasError::Config("Could not determine config directory".into()))?
            .join("citas");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (writing a commented default first if there is
    /// none) and apply `CITAS_*` environment overrides.
    pub fn load() -> CitasResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_with_env(&config_path)
    }

    /// Load from `path`, then apply `CITAS_*` environment overrides.
    pub fn load_with_env(path: &Path) -> CitasResult<Self> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("CITAS").try_parsing(true));

        Self::build(builder)
    }

    /// Load from a specific file only, without environment overrides.
    pub fn load_from(path: &Path) -> CitasResult<Self> {
        let builder = Config::builder().add_source(File::from(path.to_path_buf()).required(false));
        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> CitasResult<Self> {
        let config: CitasConfig = builder
            .build()
            .map_err(|e| CitasError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CitasError::Config(e.to_string()))?;

        if !(1..=MAX_THRESHOLD_HOURS).contains(&config.reminder_threshold_hours) {
            return Err(CitasError::Config(format!(
                "reminder_threshold_hours must be between 1 and {}, got {}",
                MAX_THRESHOLD_HOURS, config.reminder_threshold_hours
            )));
        }

        Ok(config)
    }

    /// The data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn reminder_window(&self) -> Duration {
        Duration::try_hours(self.reminder_threshold_hours).unwrap_or(Duration::MAX)
    }

    /// Replace the configured data file, e.g. from `--data-file`.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }

    /// The JSON backend for the configured data file.
    pub fn backend(&self) -> JsonFile {
        JsonFile::new(self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CitasResult<()> {
        let contents = format!(
            "\
# citas configuration

# Where clients and appointments are stored:
# data_file = \"{}\"

# How many hours ahead `citas reminders` looks:
# reminder_threshold_hours = {}
",
            DEFAULT_DATA_FILE, DEFAULT_THRESHOLD_HOURS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CitasError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CitasError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("citas/config.toml");
        CitasConfig::create_default_config(&path).unwrap();

        let config = CitasConfig::load_from(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.reminder_threshold_hours, 24);
        assert_eq!(config.reminder_window(), Duration::hours(24));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CitasConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.reminder_threshold_hours, DEFAULT_THRESHOLD_HOURS);
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/srv/citas/data.json\"\nreminder_threshold_hours = 48\n",
        )
        .unwrap();

        let config = CitasConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/srv/citas/data.json"));
        assert_eq!(config.reminder_window(), Duration::hours(48));
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "reminder_threshold_hours = 0\n").unwrap();

        let err = CitasConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CitasError::Config(_)));
    }

    #[test]
    fn rejects_threshold_above_maximum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "reminder_threshold_hours = 10000000000\n").unwrap();

        let err = CitasConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CitasError::Config(_)));
    }

    #[test]
    fn accepts_maximum_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, format!("reminder_threshold_hours = {}\n", MAX_THRESHOLD_HOURS))
            .unwrap();

        let config = CitasConfig::load_from(&path).unwrap();
        assert_eq!(config.reminder_window(), Duration::hours(MAX_THRESHOLD_HOURS));
    }

    #[test]
    fn oversized_window_saturates() {
        let config = CitasConfig {
            reminder_threshold_hours: i64::MAX,
            ..CitasConfig::default()
        };
        assert_eq!(config.reminder_window(), Duration::MAX);
    }

    // The only test touching CITAS_* variables, so no other test races on them.
    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/srv/citas/data.json\"\nreminder_threshold_hours = 12\n",
        )
        .unwrap();

        unsafe {
            std::env::set_var("CITAS_DATA_FILE", "/tmp/citas-env.json");
            std::env::set_var("CITAS_REMINDER_THRESHOLD_HOURS", "48");
        }
        let result = CitasConfig::load_with_env(&path);
        unsafe {
            std::env::remove_var("CITAS_DATA_FILE");
            std::env::remove_var("CITAS_REMINDER_THRESHOLD_HOURS");
        }

        let config = result.unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/citas-env.json"));
        assert_eq!(config.reminder_threshold_hours, 48);
    }

    #[test]
    fn data_file_override() {
        let config = CitasConfig::default().with_data_file(Some(PathBuf::from("/tmp/other.json")));
        assert_eq!(config.data_path(), PathBuf::from("/tmp/other.json"));

        let config = CitasConfig::default().with_data_file(None);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn data_path_expands_tilde() {
        let config = CitasConfig::default();
        let path = config.data_path();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with(".citas/citas.json"));
    }
}
