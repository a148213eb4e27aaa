//! Integration tests for Settings config loading with layered merge semantics.
//!
//! Layers (lowest to highest): defaults, global file, explicit file, TREEWALK_* env.
//! These tests pass explicit paths and an explicit env map, so neither the
//! real XDG config nor the process environment leaks in.

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use treewalk::application::ApplicationError;
use treewalk::config::Settings;
use treewalk::domain::SearchPolicy;

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn given_no_config_files_when_load_then_returns_defaults() {
    let dir = TempDir::new().unwrap();
    let missing_global = dir.path().join("treewalk.toml");

    let settings = Settings::load_layers(Some(&missing_global), None, env(&[])).expect("load");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.search_policy, SearchPolicy::First);
    assert_eq!(settings.separator, " ");
}

#[test]
fn given_global_and_local_config_when_load_then_local_wins_per_field() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let local = dir.path().join("local.toml");
    fs::write(
        &global,
        r#"
search_policy = "last"
separator = " | "
"#,
    )
    .unwrap();
    fs::write(&local, "separator = \",\"\n").unwrap();

    // Act
    let settings = Settings::load_layers(Some(&global), Some(&local), env(&[])).expect("load");

    // Assert: policy from global, separator from local, color from defaults
    assert_eq!(settings.search_policy, SearchPolicy::Last);
    assert_eq!(settings.separator, ",");
    assert!(settings.color);
}

#[test]
fn given_env_overrides_when_load_then_env_wins_over_files() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("local.toml");
    fs::write(&local, "search_policy = \"first\"\ncolor = true\n").unwrap();

    let settings = Settings::load_layers(
        None,
        Some(&local),
        env(&[
            ("TREEWALK_SEARCH_POLICY", "last"),
            ("TREEWALK_COLOR", "false"),
        ]),
    )
    .expect("load");

    assert_eq!(settings.search_policy, SearchPolicy::Last);
    assert!(!settings.color);
}

#[test]
fn given_missing_explicit_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = Settings::load_layers(None, Some(&missing), env(&[]));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_policy_in_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("local.toml");
    fs::write(&local, "search_policy = \"middle\"\n").unwrap();

    let err = Settings::load_layers(None, Some(&local), env(&[])).unwrap_err();

    assert!(err.to_string().contains("config error"));
    assert!(err.to_string().contains("local.toml"));
}

#[test]
fn given_invalid_policy_in_env_when_load_then_config_error() {
    let result = Settings::load_layers(None, None, env(&[("TREEWALK_SEARCH_POLICY", "middle")]));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("middle"));
}

#[test]
fn given_settings_when_rendering_toml_then_round_trips_through_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rendered.toml");
    let settings = Settings {
        search_policy: SearchPolicy::Last,
        separator: ", ".into(),
        color: false,
    };

    fs::write(&path, settings.to_toml().unwrap()).unwrap();
    let loaded = Settings::load_layers(None, Some(&path), env(&[])).unwrap();

    assert_eq!(loaded, settings);
}
