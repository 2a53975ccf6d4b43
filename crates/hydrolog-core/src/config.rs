//! TOML-based application configuration.
//!
//! Holds preferences only -- the default daily goal a fresh tracker starts
//! with. Tracker *state* (today's intake, the history) is deliberately never
//! persisted; it lives and dies with the process.
//!
//! Configuration is stored at `~/.config/hydrolog/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::goal::DEFAULT_GOAL_UNITS;

/// Upper bound for a sane daily goal: 100 units = 10 L.
const MAX_GOAL_UNITS: u32 = 100;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/hydrolog/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Goal a fresh tracker starts with, in units (1 unit = 0.1 L).
    #[serde(default = "default_goal_units")]
    pub default_goal_units: u32,
}

fn default_goal_units() -> u32 {
    DEFAULT_GOAL_UNITS
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_goal_units: DEFAULT_GOAL_UNITS,
        }
    }
}

/// Returns `~/.config/hydrolog[-dev]/` based on HYDROLOG_ENV.
///
/// Set HYDROLOG_ENV=dev to use the development config directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HYDROLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("hydrolog-dev")
    } else {
        base_dir.join("hydrolog")
    };

    std::fs::create_dir_all(&dir).map_err(|err| ConfigError::LoadFailed {
        path: dir.clone(),
        message: err.to_string(),
    })?;
    Ok(dir)
}

impl TrackerConfig {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing the default file on first
    /// run.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_path(&path)
        } else {
            let cfg = Self::default();
            cfg.save_path(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let cfg: Self =
            toml::from_str(&content).map_err(|err| ConfigError::ParseFailed(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Fall back to defaults when the config file is unusable.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("using default configuration: {err}");
                Self::default()
            }
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_path(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_path(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|err| ConfigError::ParseFailed(err.to_string()))?;
        std::fs::write(path, content).map_err(|err| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_goal_units == 0 || self.default_goal_units > MAX_GOAL_UNITS {
            return Err(ConfigError::InvalidValue {
                key: "default_goal_units".to_string(),
                message: format!(
                    "expected 1..={MAX_GOAL_UNITS}, got {}",
                    self.default_goal_units
                ),
            });
        }
        Ok(())
    }
}
