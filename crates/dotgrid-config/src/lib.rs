//! Configuration file handling for dotgrid.
//!
//! Settings live in a TOML file under the platform config directory
//! (`dotgrid/config.toml`). Every field has a default, so a missing file or
//! a partial one both load cleanly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use dotgrid_core::DotGridConfig;
use serde::{Deserialize, Serialize};

/// Errors raised while loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Display settings for the terminal renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Logical pixels per terminal column.
    pub pixel_scale_x: f64,
    /// Logical pixels per terminal row.
    pub pixel_scale_y: f64,
    /// Target redraw rate.
    pub fps: u32,
    /// Show the tuning panel on startup.
    pub show_panel: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            pixel_scale_x: 8.0,
            pixel_scale_y: 16.0,
            fps: 60,
            show_panel: false,
        }
    }
}

impl DisplayConfig {
    pub fn pixel_scale(&self) -> (f64, f64) {
        (self.pixel_scale_x, self.pixel_scale_y)
    }

    /// Time between redraws, with fps clamped to 1..=240.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.clamp(1, 240)))
    }
}

/// Everything stored in the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: DotGridConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Location of the config file in the platform config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "dotgrid")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = AppConfig::load_from(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.grid.cell_size = 22.0;
        config.grid.max_oscillation = 6.0;
        config.display.show_panel = true;
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[grid]\nmin_speed = 2.0\n\n[display]\nfps = 30\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.grid.min_speed, 2.0);
        assert_eq!(config.grid.cell_size, 15.0);
        assert_eq!(config.display.fps, 30);
        assert_eq!(config.display.pixel_scale(), (8.0, 16.0));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[grid\ncell_size = ").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_frame_interval_clamps() {
        let mut display = DisplayConfig::default();
        assert_eq!(display.frame_interval(), Duration::from_micros(16_666));
        display.fps = 0;
        assert_eq!(display.frame_interval(), Duration::from_secs(1));
    }
}
