use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, CELL_COUNT};

/// Depth used when nothing else is configured
pub const DEFAULT_MAX_DEPTH: u32 = 7;

/// Settings for a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of plies explored below the current position
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SearchConfig {
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self { max_depth }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth as usize > CELL_COUNT {
            return Err(ConfigError::Validation(format!(
                "search.max_depth must be between 1 and {}, got {}",
                CELL_COUNT, self.max_depth
            )));
        }
        Ok(())
    }
}

/// Top-level application configuration, loadable from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    /// Pause before each engine move when both players are engines
    pub ai_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            ai_delay_ms: 1500,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()
    }
}
