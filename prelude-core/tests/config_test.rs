use std::io::Write;

use prelude_core::config::*;
use prelude_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = PreludeConfig::from_toml("").unwrap();

    // Client defaults
    assert_eq!(config.client.base_url, "https://api.preludesecurity.com");
    assert_eq!(config.client.timeout_secs, 30);
    assert_eq!(config.client.max_retries, 3);
    assert_eq!(config.client.initial_backoff_ms, 500);
    assert_eq!(config.client.max_backoff_ms, 30_000);

    // Account defaults
    assert!(config.account.handle.is_none());
    assert!(config.account.token.is_none());

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[client]
base_url = "http://localhost:8080"
max_retries = 0

[account]
handle = "acct-1"
token = "secret"
"#;
    let config = PreludeConfig::from_toml(toml).unwrap();
    assert_eq!(config.client.base_url, "http://localhost:8080");
    assert_eq!(config.client.max_retries, 0);
    // Non-overridden fields keep defaults
    assert_eq!(config.client.timeout_secs, 30);

    let creds = config.credentials().unwrap();
    assert_eq!(creds.account, "acct-1");
    assert_eq!(creds.token, "secret");
}

#[test]
fn config_rejects_malformed_toml() {
    let err = PreludeConfig::from_toml("[client\nbase_url = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_or_blank_credentials_are_an_error() {
    let config = PreludeConfig::from_toml("[account]\nhandle = \"acct\"\n").unwrap();
    assert!(matches!(
        config.credentials(),
        Err(ConfigError::MissingCredentials)
    ));

    let config = PreludeConfig::from_toml("[account]\nhandle = \"acct\"\ntoken = \"  \"\n").unwrap();
    assert!(matches!(
        config.credentials(),
        Err(ConfigError::MissingCredentials)
    ));
}

#[test]
fn credentials_debug_hides_token() {
    let creds = Credentials::new("acct", "super-secret");
    let printed = format!("{creds:?}");
    assert!(printed.contains("acct"));
    assert!(!printed.contains("super-secret"));
}

#[test]
fn config_reads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[observability]\nlog_level = \"debug\"\njson_logs = true").unwrap();

    let config = PreludeConfig::from_file(file.path()).unwrap();
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.observability.json_logs);
}

#[test]
fn missing_file_reports_path() {
    let err = PreludeConfig::from_file("/nonexistent/prelude/config.toml").unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.contains("nonexistent")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn client_config_durations() {
    let client = ClientConfig::default();
    assert_eq!(client.timeout(), std::time::Duration::from_secs(30));
    assert_eq!(client.initial_backoff(), std::time::Duration::from_millis(500));
    assert_eq!(client.max_backoff(), std::time::Duration::from_secs(30));
}

#[test]
fn config_serde_roundtrip() {
    let config = PreludeConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = PreludeConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.client.base_url, config.client.base_url);
    assert_eq!(roundtripped.client.max_backoff_ms, config.client.max_backoff_ms);
}
