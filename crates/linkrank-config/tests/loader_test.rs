use std::fs;

use linkrank_config::{Config, ConfigError};
use pretty_assertions::assert_eq;

#[test]
fn loads_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linkrank.toml");
    fs::write(
        &path,
        "[pagerank]\ndamping = 0.5\niterations = 3\n\n[search]\ntop_k = 5\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.pagerank.damping, 0.5);
    assert_eq!(config.pagerank.iterations, 3);
    assert_eq!(config.search.top_k, 5);
    // Unset fields fall back to serde defaults.
    assert_eq!(config.search.pagerank_weight, 1.0);
}

#[test]
fn loads_yaml_and_json() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("linkrank.yml");
    fs::write(&yaml, "pagerank:\n  damping: 0.9\n").unwrap();
    let config = Config::from_file(&yaml).unwrap();
    assert_eq!(config.pagerank.damping, 0.9);

    let json = dir.path().join("linkrank.json");
    fs::write(&json, r#"{"search": {"top_k": 2}}"#).unwrap();
    let config = Config::from_file(&json).unwrap();
    assert_eq!(config.search.top_k, 2);
}

#[test]
fn rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linkrank.ini");
    fs::write(&path, "").unwrap();
    assert!(matches!(
        Config::from_file(&path),
        Err(ConfigError::UnknownFormat { .. })
    ));
}

#[test]
fn missing_file_is_reported() {
    assert!(matches!(
        Config::from_file("/nonexistent/linkrank.toml"),
        Err(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn invalid_values_fail_validation_at_load_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linkrank.toml");
    fs::write(&path, "[pagerank]\ndamping = 2.0\n").unwrap();
    assert!(matches!(
        Config::from_file(&path),
        Err(ConfigError::OutOfRange { .. })
    ));
}

#[test]
fn parse_errors_carry_the_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linkrank.toml");
    fs::write(&path, "[pagerank\n").unwrap();
    assert!(matches!(
        Config::from_file(&path),
        Err(ConfigError::Toml { .. })
    ));
}
