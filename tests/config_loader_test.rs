//! Integration tests for configuration loading from disk and environment.

use std::fs;

use mortgage_calculator::{ConfigError, ConfigLoader};

#[test]
fn test_load_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(
        &path,
        "server:\n  host: 127.0.0.1\n  port: 9000\n  enable_cors: false\nlogging:\n  level: debug\n  format: json\n",
    )
    .unwrap();

    let config = temp_env::with_vars_unset(
        ["MORTGAGE_SERVER__PORT", "MORTGAGE_LOGGING__LEVEL"],
        || ConfigLoader::load_from_file(&path).unwrap(),
    );

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert!(!config.server.enable_cors);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");

    let config = temp_env::with_vars_unset(
        ["MORTGAGE_SERVER__PORT", "MORTGAGE_LOGGING__LEVEL"],
        || ConfigLoader::load_from_file(&path).unwrap(),
    );

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(&path, "server:\n  port: 9000\n").unwrap();

    let config = temp_env::with_vars(
        [
            ("MORTGAGE_SERVER__PORT", Some("7070")),
            ("MORTGAGE_LOGGING__LEVEL", Some("warn")),
        ],
        || ConfigLoader::load_from_file(&path).unwrap(),
    );

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_rejects_other_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yml");
    fs::write(&path, "server:\n  port: 9000\n").unwrap();

    let err = ConfigLoader::load_from_file(&path).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidFileName)
    ));
}

#[test]
fn test_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(&path, "logging:\n  format: xml\n").unwrap();

    let err = temp_env::with_vars_unset(["MORTGAGE_LOGGING__FORMAT"], || {
        ConfigLoader::load_from_file(&path).unwrap_err()
    });

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidLogFormat(format)) if format == "xml"
    ));
}
