use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_WRAP_SIZE: f64 = 100.0;
const DEFAULT_SPAN: f64 = 1.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum width of a column in pixels before a row wraps. 0 disables
    /// width-based wrapping; useful for smaller devices.
    #[serde(default = "default_wrap_size")]
    pub wrap_size: f64,
    /// Span multiplier for columns that do not declare one. With a
    /// minimum width set, a column's width is the minimum times its span.
    #[serde(default = "default_span")]
    pub default_span: f64,
}

fn default_wrap_size() -> f64 {
    DEFAULT_WRAP_SIZE
}

fn default_span() -> f64 {
    DEFAULT_SPAN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_size: DEFAULT_WRAP_SIZE,
            default_span: DEFAULT_SPAN,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-columns");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
