//! Tests for the decibans configuration system.

use std::sync::Mutex;

use decibans_core::config::{ConfigOverrides, DecibansConfig};
use decibans_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 4] = [
    "DECIBANS_SMOOTHING_PRIOR",
    "DECIBANS_SMOOTHING_ALPHA",
    "DECIBANS_SMOOTHING_CARDINALITY",
    "DECIBANS_SMOOTHING_CREDIBLE_LEVEL",
];

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear DECIBANS_ env vars and point HOME at an empty directory so a real
/// user config cannot leak into the test.
fn isolate_env(home: &std::path::Path) {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

#[test]
fn test_load_missing_files_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = DecibansConfig::load(dir.path(), None).unwrap();

    assert_eq!(config, DecibansConfig::default());
    assert_eq!(config.smoothing.effective_alpha(), 1.0);
    assert_eq!(config.smoothing.effective_cardinality(), 2);
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".decibans");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[smoothing]
cardinality = 6
credible_level = 0.8
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("decibans.toml"),
        r#"
[smoothing]
prior = "jeffreys"
cardinality = 3
"#,
    )
    .unwrap();

    std::env::set_var("DECIBANS_SMOOTHING_CARDINALITY", "4");

    let overrides = ConfigOverrides {
        smoothing_credible_level: Some(0.9),
        ..Default::default()
    };
    let config = DecibansConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Project beats user for the prior.
    assert_eq!(config.smoothing.effective_alpha(), 0.5);
    // Env beats project for cardinality.
    assert_eq!(config.smoothing.effective_cardinality(), 4);
    // Overrides beat user for the credible level.
    assert_eq!(config.smoothing.effective_credible_level(), 0.9);

    isolate_env(home.path());
}

#[test]
fn test_env_alpha_overrides_named_prior() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::env::set_var("DECIBANS_SMOOTHING_PRIOR", "jeffreys");
    std::env::set_var("DECIBANS_SMOOTHING_ALPHA", "0.1");

    let config = DecibansConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.smoothing.effective_alpha(), 0.1);

    isolate_env(home.path());
}

#[test]
fn test_unparsable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::env::set_var("DECIBANS_SMOOTHING_ALPHA", "not-a-number");

    let config = DecibansConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.smoothing.alpha, None);

    isolate_env(home.path());
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("decibans.toml"), "[smoothing\nalpha = ").unwrap();

    let err = DecibansConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        ("[smoothing]\nalpha = 0.0", "smoothing.alpha"),
        ("[smoothing]\nalpha = -1.0", "smoothing.alpha"),
        ("[smoothing]\ncardinality = 0", "smoothing.cardinality"),
        ("[smoothing]\ncredible_level = 1.0", "smoothing.credible_level"),
        ("[smoothing]\nprior = \"haldane\"", "smoothing.prior"),
    ];
    for (toml_str, expected_field) in cases {
        match DecibansConfig::from_toml(toml_str) {
            Err(ConfigError::ValidationFailed { field, .. }) => {
                assert_eq!(field, expected_field, "for {toml_str:?}");
            }
            other => panic!("expected validation failure for {toml_str:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = DecibansConfig::from_toml(
        r#"
[smoothing]
alpha = 0.25
future_option = true

[reporting]
format = "json"
"#,
    )
    .unwrap();
    assert_eq!(config.smoothing.effective_alpha(), 0.25);
}

#[test]
fn test_toml_round_trip() {
    let config = DecibansConfig::from_toml(
        r#"
[smoothing]
prior = "jeffreys"
cardinality = 5
credible_level = 0.99
"#,
    )
    .unwrap();
    let serialized = config.to_toml().unwrap();
    let reparsed = DecibansConfig::from_toml(&serialized).unwrap();
    assert_eq!(config, reparsed);
}
