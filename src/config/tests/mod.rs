//! Unit tests for config module
//!
//! Tests configuration types, defaults, parsing and validation.

#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::{
    SmediaError,
    config::{BusKind, Config, LogLevel},
    services::media::ParsePolicy,
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.bus.kind, BusKind::Session);
    assert!(config.bus.address.is_empty());
    assert_eq!(config.bus.object_path, "/io/smart/OMedia");
    assert_eq!(config.bus.service_name, "io.smart.SMedia");
    assert_eq!(config.media.parse_policy, ParsePolicy::Lenient);
    assert_eq!(config.media.event_capacity, 64);
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[bus]"));
    assert!(toml_str.contains("[media]"));
    assert!(toml_str.contains("parse_policy = \"lenient\""));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [bus]
        kind = "system"
        service_name = "org.example.Media"

        [media]
        parse_policy = "strict"
        event_capacity = 8
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.bus.kind, BusKind::System);
    assert_eq!(config.bus.service_name, "org.example.Media");
    assert_eq!(config.bus.object_path, "/io/smart/OMedia");
    assert_eq!(config.media.parse_policy, ParsePolicy::Strict);
    assert_eq!(config.media.event_capacity, 8);
}

#[test]
fn config_empty_toml_is_default() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_rejects_unknown_policy() {
    let err = Config::from_toml_str("[media]\nparse_policy = \"picky\"").unwrap_err();
    assert!(matches!(err, SmediaError::ConfigSyntax { ref location, .. } if location == "<inline>"));
}

#[test]
fn config_rejects_zero_capacity() {
    let err = Config::from_toml_str("[media]\nevent_capacity = 0").unwrap_err();
    match err {
        SmediaError::InvalidField { section, field, .. } => {
            assert_eq!((section, field), ("media", "event_capacity"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_bad_object_path() {
    let err = Config::from_toml_str("[bus]\nobject_path = \"not/a/path\"").unwrap_err();
    assert!(matches!(
        err,
        SmediaError::InvalidField {
            field: "object_path",
            ..
        }
    ));
}

#[test]
fn config_rejects_bad_service_name() {
    let err = Config::from_toml_str("[bus]\nservice_name = \"smedia\"").unwrap_err();
    assert!(matches!(
        err,
        SmediaError::InvalidField {
            field: "service_name",
            ..
        }
    ));
    assert!(err.to_string().starts_with("[bus] service_name:"));
}

#[test]
fn load_from_missing_file_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[bus]\naddress = \"unix:path=/tmp/test-bus\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.bus.address, "unix:path=/tmp/test-bus");
}

#[test]
fn load_from_directory_is_a_read_error() {
    let temp_dir = TempDir::new().unwrap();

    match Config::load_from(temp_dir.path()).unwrap_err() {
        SmediaError::ConfigRead { path, .. } => assert_eq!(path, temp_dir.path()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_from_invalid_file_reports_location() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[bus\n").unwrap();

    match Config::load_from(&path).unwrap_err() {
        SmediaError::ConfigSyntax { location, .. } => {
            assert!(location.ends_with("config.toml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn json_schema_lists_sections() {
    let schema = Config::json_schema().unwrap();
    assert!(schema.contains("parse_policy"));
    assert!(schema.contains("service_name"));
}

#[test]
fn log_level_maps_to_tracing_filter() {
    use tracing::level_filters::LevelFilter;

    assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::ERROR);
    assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
    assert_eq!(LogLevel::Warn.to_string(), "warn");
}
