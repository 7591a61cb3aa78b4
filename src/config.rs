use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub tui: TuiConfig,
    pub delete: DeleteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Show a spinner on stderr while the startup scan runs
    pub show_progress: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Unit family used for sizes
    pub size_units: SizeUnits,
    /// Render with colors
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteConfig {
    /// Remove folders together with their contents; when false only empty
    /// folders can be removed
    pub recursive_folders: bool,
}

/// Unit family for human-readable sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnits {
    /// Powers of 1000 (kB, MB, GB).
    #[default]
    Decimal,
    /// Powers of 1024 (KiB, MiB, GiB).
    Binary,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            size_units: SizeUnits::Decimal,
            color: true,
        }
    }
}

impl Default for DeleteConfig {
    fn default() -> Self {
        Self {
            recursive_folders: true,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user file
    /// (`<config dir>/sizewise/config.toml`) is used when present and the
    /// defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Location of the per-user configuration file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sizewise").join("config.toml"))
    }

    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tui.tick_rate_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
