//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/cellgrid/config.yaml`

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::coordinates::Direction;
use crate::input::default_navigation_keys;

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Rows of a newly created table (including the header row)
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Columns of a newly created table (including the header column)
    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Lay new tables out with an origin cell and row/column headers
    #[serde(default = "default_headers")]
    pub headers: bool,

    /// Key name → selection direction
    #[serde(default = "default_navigation_keys")]
    pub navigation_keys: HashMap<String, Direction>,
}

fn default_rows() -> usize {
    10
}

fn default_cols() -> usize {
    6
}

fn default_headers() -> bool {
    true
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            headers: default_headers(),
            navigation_keys: default_navigation_keys(),
        }
    }
}

impl GridConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
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

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: GridConfig = serde_yaml::from_str("rows: 3\n").unwrap();
        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, 6);
        assert!(config.headers);
        assert_eq!(
            config.navigation_keys.get("ArrowUp"),
            Some(&Direction::Up)
        );
    }

    #[test]
    fn test_navigation_keys_yaml() {
        let yaml = "navigation_keys:\n  k: up\n  j: down\n";
        let config: GridConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.navigation_keys.len(), 2);
        assert_eq!(config.navigation_keys.get("j"), Some(&Direction::Down));
    }
}
