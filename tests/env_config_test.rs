//! `Settings::load` against the real process environment.
//!
//! Kept in its own test binary with a single test: it mutates process-wide
//! environment variables.

use std::env;
use std::fs;

use tempfile::TempDir;

use patternbook::config::{global_config_path, Settings};

#[test]
fn given_process_env_when_loading_then_xdg_global_local_and_env_layers_apply() {
    // Arrange
    let temp = TempDir::new().unwrap();
    env::set_var("XDG_CONFIG_HOME", temp.path());
    for key in ["PATTERNBOOK_SEPARATOR", "PATTERNBOOK_THEME", "PATTERNBOOK_SORT_ORDER"] {
        env::remove_var(key);
    }

    let global = global_config_path().expect("config dir");
    fs::create_dir_all(global.parent().unwrap()).unwrap();
    fs::write(&global, "separator = \" / \"\ntheme = \"macos\"\n").unwrap();

    let local = temp.path().join(".patterns.toml");
    fs::write(&local, "theme = \"windows\"\nsort_order = \"ascending\"\n").unwrap();

    env::set_var("PATTERNBOOK_SORT_ORDER", "descending");

    // Act
    let settings = Settings::load(Some(&local)).expect("load settings");

    // Assert
    if cfg!(target_os = "linux") {
        assert!(global.starts_with(temp.path()), "{}", global.display());
        assert_eq!(settings.separator, " / ", "global file applies");
    }
    assert_eq!(settings.theme, "windows", "local beats global");
    assert_eq!(settings.sort_order, "descending", "env beats local");

    env::set_var("PATTERNBOOK_THEME", "macos");
    let settings = Settings::load(None).expect("load settings");
    assert_eq!(settings.theme, "macos");
}
