//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/sheetgrid/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::{RenderOptions, DEFAULT_COLS, DEFAULT_ROWS};

/// Grid configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Rows in a blank grid when no data is supplied
    #[serde(default = "default_rows")]
    pub default_rows: usize,
    /// Columns in a blank grid when no data is supplied
    #[serde(default = "default_cols")]
    pub default_cols: usize,
    /// Narrowest rendered column, in characters
    #[serde(default = "default_min_column_width")]
    pub min_column_width: usize,
    /// Widest rendered column; longer values are truncated with an ellipsis
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

fn default_min_column_width() -> usize {
    4
}

fn default_max_column_width() -> usize {
    40
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_rows: default_rows(),
            default_cols: default_cols(),
            min_column_width: default_min_column_width(),
            max_column_width: default_max_column_width(),
        }
    }
}

impl GridConfig {
    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Column sizing for text rendering
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            min_column_width: self.min_column_width,
            max_column_width: self.max_column_width,
        }
    }
}
