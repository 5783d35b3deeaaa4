use std::collections::HashMap;

use mindcare_api::config::{ApiConfig, DEFAULT_MAX_SESSIONS};

fn config_from(vars: &[(&str, &str)]) -> Result<ApiConfig, mindcare_api::config::ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|var| vars.get(var).cloned())
}

#[test]
fn defaults_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config, ApiConfig::default());
    assert_eq!(config.max_sessions, DEFAULT_MAX_SESSIONS);
    assert!(!config.lambda);
}

#[test]
fn reads_overrides() {
    let config = config_from(&[
        ("MINDCARE_BIND_ADDR", "127.0.0.1:8080"),
        ("MINDCARE_MAX_SESSIONS", "50"),
        ("MINDCARE_LAMBDA", "TRUE"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.max_sessions, 50);
    assert!(config.lambda);
}

#[test]
fn rejects_invalid_values() {
    let err = config_from(&[("MINDCARE_MAX_SESSIONS", "lots")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for MINDCARE_MAX_SESSIONS: lots");

    assert!(config_from(&[("MINDCARE_MAX_SESSIONS", "0")]).is_err());
    assert!(config_from(&[("MINDCARE_BIND_ADDR", "nowhere")]).is_err());
    assert!(config_from(&[("MINDCARE_LAMBDA", "maybe")]).is_err());
}
