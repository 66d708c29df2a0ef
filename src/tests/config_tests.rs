use std::collections::HashMap;
use std::fs;

use crate::config::{load_config_from, Config};
use crate::constants::RAILWAY_API_URL;
use crate::error::StatusError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_reads_environment_variables() {
    let config = Config::from_lookup(lookup(&[
        ("RAILWAY_API_TOKEN", "token-1"),
        ("RAILWAY_PROJECT_ID", "project-1"),
        ("RAILWAY_ENVIRONMENT_ID", "env-1"),
    ]));

    assert_eq!(config.api_url, None);
    assert_eq!(config.api_token.as_deref(), Some("token-1"));
    assert_eq!(config.project_id.as_deref(), Some("project-1"));
    assert_eq!(config.environment_id.as_deref(), Some("env-1"));
}

#[test]
fn test_blank_environment_variables_are_ignored() {
    let config = Config::from_lookup(lookup(&[("RAILWAY_API_TOKEN", "  ")]));
    assert_eq!(config.api_token, None);
}

#[test]
fn test_earlier_sources_win() {
    let flags = Config {
        project_id: Some("from-flag".into()),
        ..Config::default()
    };
    let env = Config::from_lookup(lookup(&[
        ("RAILWAY_API_TOKEN", "from-env"),
        ("RAILWAY_PROJECT_ID", "from-env"),
    ]));
    let file = Config {
        api_url: Some("https://example.test/graphql".into()),
        api_token: Some("from-file".into()),
        ..Config::default()
    };

    let resolved = flags.or(env).or(file).resolve().unwrap();

    assert_eq!(resolved.project_id, "from-flag");
    assert_eq!(resolved.api_token, "from-env");
    assert_eq!(resolved.api_url, "https://example.test/graphql");
    assert_eq!(resolved.environment_id, None);
}

#[test]
fn test_default_endpoint() {
    let resolved = Config {
        api_token: Some("t".into()),
        project_id: Some("p".into()),
        ..Config::default()
    }
    .resolve()
    .unwrap();

    assert_eq!(resolved.api_url, RAILWAY_API_URL);
}

#[test]
fn test_missing_token_is_a_config_error() {
    let result = Config {
        project_id: Some("p".into()),
        ..Config::default()
    }
    .resolve();

    match result {
        Err(StatusError::Config(msg)) => assert!(msg.contains("RAILWAY_API_TOKEN")),
        other => panic!("Expected StatusError::Config, got {:?}", other),
    }
}

#[test]
fn test_missing_project_is_a_config_error() {
    let result = Config {
        api_token: Some("t".into()),
        ..Config::default()
    }
    .resolve();

    match result {
        Err(StatusError::Config(msg)) => assert!(msg.contains("RAILWAY_PROJECT_ID")),
        other => panic!("Expected StatusError::Config, got {:?}", other),
    }
}

#[test]
fn test_debug_output_hides_the_token() {
    let resolved = Config {
        api_token: Some("super-secret".into()),
        project_id: Some("p".into()),
        ..Config::default()
    }
    .resolve()
    .unwrap();

    let debug = format!("{:?}", resolved);
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_load_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".railway-status-config.json");
    fs::write(&path, r#"{ "api_token": "file-token", "project_id": "file-project" }"#).unwrap();

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.api_token.as_deref(), Some("file-token"));
    assert_eq!(config.project_id.as_deref(), Some("file-project"));
    assert_eq!(config.api_url, None);
}

#[test]
fn test_missing_config_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    match load_config_from(&path) {
        Err(StatusError::Config(msg)) => assert!(msg.contains("Malformed config file")),
        other => panic!("Expected StatusError::Config, got {:?}", other),
    }
}

fn complete() -> Config {
    Config {
        api_url: Some("https://example.test/graphql".into()),
        api_token: Some("t".into()),
        project_id: Some("p".into()),
        environment_id: Some("e".into()),
    }
}

#[test]
fn test_complete_config_skips_the_file() {
    let config = complete()
        .or_file(|| Err(StatusError::Config("home directory unavailable".into())))
        .unwrap();

    assert_eq!(config, complete());
}

#[test]
fn test_incomplete_config_reads_the_file() {
    let flags = Config {
        api_token: Some("from-flag".into()),
        ..Config::default()
    };

    let config = flags
        .or_file(|| Ok(Config {
            api_token: Some("from-file".into()),
            project_id: Some("file-project".into()),
            ..Config::default()
        }))
        .unwrap();

    assert_eq!(config.api_token.as_deref(), Some("from-flag"));
    assert_eq!(config.project_id.as_deref(), Some("file-project"));
}

#[test]
fn test_file_errors_surface_when_the_file_is_needed() {
    let result = Config::default()
        .or_file(|| Err(StatusError::Config("Malformed config file".into())));

    assert!(matches!(result, Err(StatusError::Config(_))));
}
