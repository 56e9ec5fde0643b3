//! Tests for server configuration loading and overrides.

use broadside::rules::MatchRules;
use broadside::{EXPOSE_FULL_STATE_ENV, HOST_ENV, PORT_ENV, ServerConfig};
use std::collections::HashMap;
use std::io::Write;
use std::net::SocketAddr;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 3000);
    assert!(!*config.expose_full_state());
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.rules(), &MatchRules::default());
    assert_eq!(
        config.socket_addr().unwrap(),
        "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
    );
}

#[test]
fn test_from_file_fills_missing_fields_with_defaults() {
    let file = write_config(
        r#"
port = 8080
expose_full_state = true

[rules]
ship_lengths = [5, 4, 3, 3, 2]
reject_repeat_shots = true
"#,
    );

    let config = ServerConfig::from_file(file.path()).unwrap();

    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 8080);
    assert!(*config.expose_full_state());
    assert_eq!(
        config.rules(),
        &MatchRules::classic().with_reject_repeat_shots(true)
    );
}

#[test]
fn test_missing_file_is_an_error() {
    let err = ServerConfig::from_file("/nonexistent/broadside.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("port = \"not a number\"");
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_env_overrides_file() {
    let config = ServerConfig::default()
        .apply_env(env(&[
            (HOST_ENV, "0.0.0.0"),
            (PORT_ENV, "9000"),
            (EXPOSE_FULL_STATE_ENV, "true"),
        ]))
        .unwrap();

    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 9000);
    assert!(*config.expose_full_state());
}

#[test]
fn test_unset_env_keeps_values() {
    let config = ServerConfig::default().apply_env(env(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_bad_env_port_is_an_error() {
    let err = ServerConfig::default()
        .apply_env(env(&[(PORT_ENV, "eighty")]))
        .unwrap_err();
    assert!(err.message.contains(PORT_ENV));
}

#[test]
fn test_bad_env_flag_is_an_error() {
    let err = ServerConfig::default()
        .apply_env(env(&[(EXPOSE_FULL_STATE_ENV, "maybe")]))
        .unwrap_err();
    assert!(err.message.contains(EXPOSE_FULL_STATE_ENV));
}

#[test]
fn test_cli_overrides_win() {
    let config = ServerConfig::default()
        .apply_env(env(&[(PORT_ENV, "9000")]))
        .unwrap()
        .with_overrides(Some("::1".to_string()), Some(7000));

    assert_eq!(
        config.socket_addr().unwrap(),
        "[::1]:7000".parse::<SocketAddr>().unwrap()
    );
}

#[test]
fn test_unparseable_host_is_an_error() {
    let config = ServerConfig::default().with_overrides(Some("localhost".to_string()), None);
    assert!(config.socket_addr().is_err());
}
