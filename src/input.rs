//! Directional input for cell navigation
//!
//! Maps key names (as reported by the host's input layer, e.g. `ArrowUp`)
//! to selection directions. Everything else about input handling belongs
//! to the host.

use std::collections::HashMap;

use crate::config::GridConfig;
use crate::coordinates::Direction;

/// Key name → direction bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationKeys {
    bindings: HashMap<String, Direction>,
}

impl Default for NavigationKeys {
    fn default() -> Self {
        Self {
            bindings: default_navigation_keys(),
        }
    }
}

/// `ArrowUp`/`ArrowRight`/`ArrowDown`/`ArrowLeft`
pub fn default_navigation_keys() -> HashMap<String, Direction> {
    [
        ("ArrowUp", Direction::Up),
        ("ArrowRight", Direction::Right),
        ("ArrowDown", Direction::Down),
        ("ArrowLeft", Direction::Left),
    ]
    .into_iter()
    .map(|(key, direction)| (key.to_string(), direction))
    .collect()
}

impl NavigationKeys {
    /// No bindings at all
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bindings configured by the user
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            bindings: config.navigation_keys.clone(),
        }
    }

    pub fn bind(&mut self, key: impl Into<String>, direction: Direction) {
        self.bindings.insert(key.into(), direction);
    }

    pub fn unbind(&mut self, key: &str) -> Option<Direction> {
        self.bindings.remove(key)
    }

    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        self.bindings.get(key).copied()
    }
}
