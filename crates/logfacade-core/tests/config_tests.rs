#![allow(clippy::unwrap_used, clippy::expect_used)]

use logfacade_core::config::{ENV_BACKEND, ENV_DEBUG, ENV_DEBUG_SCOPES};
use logfacade_core::logging_facility::Profile;
use logfacade_core::{BackendKind, ErrorKind, FacadeConfig};
use std::collections::HashMap;
use std::io::Write;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_empty_document_gives_defaults() {
    let config = FacadeConfig::from_toml_str("").unwrap();
    assert_eq!(config, FacadeConfig::default());
    assert_eq!(config.backend, BackendKind::Console);
    assert_eq!(config.category, "logfacade");
    assert!(!config.debug);
}

#[test]
fn test_full_document() {
    let config = FacadeConfig::from_toml_str(
        r#"
        backend = "tracing"
        category = "orders"
        profile = "production"
        debug = true
        debug_scopes = ["net", "storage.cache"]
        "#,
    )
    .unwrap();

    assert_eq!(config.backend, BackendKind::Tracing);
    assert_eq!(config.category, "orders");
    assert_eq!(config.profile, Profile::Production);
    assert!(config.debug);
    assert_eq!(config.debug_scopes, vec!["net", "storage.cache"]);
}

#[test]
fn test_unknown_key_rejected() {
    let err = FacadeConfig::from_toml_str("rotation = \"daily\"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_unknown_backend_rejected() {
    let err = FacadeConfig::from_toml_str("backend = \"syslog\"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "debug = true").unwrap();

    let config = FacadeConfig::from_file(file.path()).unwrap();
    assert!(config.debug);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FacadeConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_env_overrides() {
    let env = vars(&[
        (ENV_BACKEND, "Tracing"),
        (ENV_DEBUG, "yes"),
        (ENV_DEBUG_SCOPES, " net , ,db.pool "),
    ]);

    let config = FacadeConfig::default()
        .apply_vars(|k| env.get(k).cloned())
        .unwrap();

    assert_eq!(config.backend, BackendKind::Tracing);
    assert!(config.debug);
    assert_eq!(config.debug_scopes, vec!["net", "db.pool"]);
}

#[test]
fn test_env_absent_leaves_config_unchanged() {
    let original = FacadeConfig::from_toml_str("debug = true").unwrap();
    let config = original.clone().apply_vars(|_| None).unwrap();
    assert_eq!(config, original);
}

#[test]
fn test_invalid_env_value_rejected() {
    let env = vars(&[(ENV_DEBUG, "sometimes")]);
    let err = FacadeConfig::default()
        .apply_vars(|k| env.get(k).cloned())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_build_logger_applies_debug_settings() {
    let config = FacadeConfig {
        debug: true,
        debug_scopes: vec!["net".to_string()],
        ..FacadeConfig::default()
    };

    let root = config.build_logger();
    assert_eq!(root.name(), "");
    assert!(root.is_debug_enabled());
    assert!(root.get_logger("net").get_logger("tcp").is_debug_enabled());
    assert!(!root.get_logger("disk").is_debug_enabled());
}

#[test]
fn test_build_backend_matches_kind() {
    let console = FacadeConfig::default().build_backend();
    assert_eq!(console.name(), "console");

    let tracing = FacadeConfig {
        backend: BackendKind::Tracing,
        ..FacadeConfig::default()
    }
    .build_backend();
    assert_eq!(tracing.name(), "tracing");
}

#[test]
fn test_build_context_defaults_to_debug_disabled() {
    let context = FacadeConfig::default().build_context();
    assert!(!context.is_debug_enabled());
}
