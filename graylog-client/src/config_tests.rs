//! Unit tests for configuration resolution

use super::{resolve, ConfigOverrides, RawConfig};
use graylog_protocol::{ConfigError, Environment};

fn full_raw() -> RawConfig {
    RawConfig {
        server: Some("graylog.example.com".to_string()),
        input_port: Some("12201".to_string()),
        app_name: Some("billing".to_string()),
        app_version: Some("2.1.0".to_string()),
        environment: Some("PROD".to_string()),
        show_console: Some("false".to_string()),
    }
}

#[test]
fn resolves_complete_raw_config() {
    let config = resolve(full_raw(), &ConfigOverrides::new()).unwrap();

    assert_eq!(config.server, "graylog.example.com");
    assert_eq!(config.input_port, 12201);
    assert_eq!(config.app_name, "billing");
    assert_eq!(config.app_version, "2.1.0");
    assert_eq!(config.environment, Environment::Prod);
    assert!(!config.show_console);
}

#[test]
fn overrides_take_precedence() {
    let overrides = ConfigOverrides::new()
        .server("other.example.com")
        .input_port(2000)
        .environment(Environment::Staging)
        .show_console(true);
    let config = resolve(full_raw(), &overrides).unwrap();

    assert_eq!(config.server, "other.example.com");
    assert_eq!(config.input_port, 2000);
    assert_eq!(config.environment, Environment::Staging);
    assert!(config.show_console);
    // Untouched fields fall back to the raw defaults.
    assert_eq!(config.app_name, "billing");
}

#[test]
fn missing_fields_are_named() {
    let cases: [(&str, fn(&mut RawConfig)); 5] = [
        ("server", |raw| raw.server = None),
        ("inputPort", |raw| raw.input_port = None),
        ("appName", |raw| raw.app_name = None),
        ("appVersion", |raw| raw.app_version = None),
        ("environment", |raw| raw.environment = None),
    ];

    for (field, clear) in cases {
        let mut raw = full_raw();
        clear(&mut raw);
        assert_eq!(
            resolve(raw, &ConfigOverrides::new()),
            Err(ConfigError::MissingField(field)),
        );
    }
}

#[test]
fn empty_fields_count_as_missing() {
    let mut raw = full_raw();
    raw.app_name = Some(String::new());
    assert_eq!(
        resolve(raw, &ConfigOverrides::new()),
        Err(ConfigError::MissingField("appName")),
    );
}

#[test]
fn invalid_environment_is_rejected() {
    let mut raw = full_raw();
    raw.environment = Some("QA".to_string());
    assert_eq!(
        resolve(raw, &ConfigOverrides::new()),
        Err(ConfigError::InvalidEnvironment("QA".to_string())),
    );
}

#[test]
fn unparseable_port_fails_closed() {
    let mut raw = full_raw();
    raw.input_port = Some("twelve".to_string());
    assert_eq!(
        resolve(raw, &ConfigOverrides::new()),
        Err(ConfigError::InvalidPort("twelve".to_string())),
    );
}

#[test]
fn port_zero_counts_as_missing() {
    let mut raw = full_raw();
    raw.input_port = Some("0".to_string());
    assert_eq!(
        resolve(raw, &ConfigOverrides::new()),
        Err(ConfigError::MissingField("inputPort")),
    );
}

#[test]
fn show_console_defaults_to_true() {
    let mut raw = full_raw();
    raw.show_console = None;
    let config = resolve(raw, &ConfigOverrides::new()).unwrap();
    assert!(config.show_console);
}

#[test]
fn show_console_parses_case_insensitively() {
    for (value, expected) in [("TRUE", true), ("False", false), ("true", true)] {
        let mut raw = full_raw();
        raw.show_console = Some(value.to_string());
        let config = resolve(raw, &ConfigOverrides::new()).unwrap();
        assert_eq!(config.show_console, expected, "value {value:?}");
    }
}

#[test]
fn ambiguous_show_console_fails_closed() {
    let mut raw = full_raw();
    raw.show_console = Some("yes".to_string());
    assert_eq!(
        resolve(raw, &ConfigOverrides::new()),
        Err(ConfigError::InvalidShowConsole("yes".to_string())),
    );
}

#[test]
fn overrides_alone_are_sufficient() {
    let overrides = ConfigOverrides::new()
        .server("127.0.0.1")
        .input_port(12201)
        .app_name("billing")
        .app_version("2.1.0")
        .environment(Environment::Dev)
        .show_console(false);
    let config = resolve(RawConfig::default(), &overrides).unwrap();
    assert_eq!(config.environment, Environment::Dev);
}
