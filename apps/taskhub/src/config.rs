//! TaskHub configuration

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the store generates ids for new entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID suffixes
    #[default]
    Uuid,
    /// Per-kind counters
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "sequential" => Ok(Self::Sequential),
            _ => Err(ConfigError::InvalidValue {
                key: "id_strategy",
                value: s.to_string(),
            }),
        }
    }
}

/// TaskHub configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskHubConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Session file (defaults to the platform data directory)
    #[serde(default)]
    pub session_path: Option<PathBuf>,

    /// Dataset JSON to seed the store with instead of the demo data
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Id generation strategy
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TaskHubConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            session_path: None,
            dataset_path: None,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl TaskHubConfig {
    /// Load configuration from the config file and environment.
    ///
    /// Environment variables take precedence over the file.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let mut config = match Self::find_config_file() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Override fields from `TASKHUB_*` variables returned by `lookup`.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(level) = lookup("TASKHUB_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(path) = lookup("TASKHUB_SESSION_PATH") {
            self.session_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("TASKHUB_DATASET_PATH") {
            self.dataset_path = Some(PathBuf::from(path));
        }

        if let Some(strategy) = lookup("TASKHUB_ID_STRATEGY") {
            self.id_strategy = strategy.parse()?;
        }

        Ok(())
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let locations = [
            PathBuf::from("taskhub.toml"),
            dirs::config_dir()
                .map(|p| p.join("taskhub").join("config.toml"))
                .unwrap_or_default(),
        ];

        locations.into_iter().find(|p| p.exists())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = TaskHubConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert!(config.session_path.is_none());
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn test_from_file_fills_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taskhub.toml");
        std::fs::write(
            &path,
            "id_strategy = \"sequential\"\ndataset_path = \"/srv/team.json\"\n",
        )
        .unwrap();

        let config = TaskHubConfig::from_file(&path).unwrap();

        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.dataset_path, Some(PathBuf::from("/srv/team.json")));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taskhub.toml");
        std::fs::write(&path, "id_strategy = ").unwrap();

        let err = TaskHubConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            ("TASKHUB_LOG_LEVEL", "debug"),
            ("TASKHUB_SESSION_PATH", "/tmp/session.json"),
            ("TASKHUB_ID_STRATEGY", "Sequential"),
        ]
        .into();
        let mut config = TaskHubConfig {
            log_level: "warn".to_string(),
            ..Default::default()
        };

        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.session_path, Some(PathBuf::from("/tmp/session.json")));
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn test_invalid_id_strategy() {
        let mut config = TaskHubConfig::default();
        let err = config
            .apply_env(|key| (key == "TASKHUB_ID_STRATEGY").then(|| "random".to_string()))
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "id_strategy",
                ..
            }
        ));
    }
}
