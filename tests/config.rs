//! Configuration system tests
//!
//! Tests for config paths and grid config persistence.

use cellgrid::config::GridConfig;
use cellgrid::config_paths;
use cellgrid::{Direction, NavigationKeys};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("cellgrid"));
    }
}

#[test]
fn test_config_file_is_yaml() {
    if let Some(file) = config_paths::config_file() {
        assert_eq!(file.file_name().unwrap(), "config.yaml");
    }
}

#[test]
fn test_logs_dir_under_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
        assert!(logs.ends_with("logs"));
    }
}

// ========================================================================
// GridConfig Tests
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = GridConfig::default();
    config.rows = 4;
    config.headers = false;
    config.navigation_keys.insert("l".to_string(), Direction::Right);

    config.save_to(&path).unwrap();
    assert!(path.exists());

    let loaded = GridConfig::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = GridConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(loaded, GridConfig::default());
}

#[test]
fn test_load_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "rows: [not, a, number\n").unwrap();
    assert_eq!(GridConfig::load_from(&path), GridConfig::default());
}

#[test]
fn test_configured_keys_replace_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "navigation_keys:\n  w: up\n  s: down\n").unwrap();

    let keys = NavigationKeys::from_config(&GridConfig::load_from(&path));
    assert_eq!(keys.direction_for("w"), Some(Direction::Up));
    assert_eq!(keys.direction_for("ArrowUp"), None);
}
