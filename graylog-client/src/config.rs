//! Configuration resolution
//!
//! Defaults are sourced from `GRAYLOG_*` environment variables, merged
//! key-by-key with caller-supplied overrides (an override always wins), then
//! normalized and validated. Resolution is a pure function of the raw
//! sources and the overrides; the environment read is isolated in
//! [`RawConfig::from_env`] so tests resolve from literal values.

use graylog_protocol::{ClientConfig, ConfigError, Environment};
use std::env;

/// String-typed configuration sources, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub server: Option<String>,
    pub input_port: Option<String>,
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub environment: Option<String>,
    pub show_console: Option<String>,
}

impl RawConfig {
    /// Collect defaults from the process environment.
    pub fn from_env() -> Self {
        Self {
            server: env::var("GRAYLOG_SERVER").ok(),
            input_port: env::var("GRAYLOG_INPUT_PORT").ok(),
            app_name: env::var("GRAYLOG_APP_NAME").ok(),
            app_version: env::var("GRAYLOG_APP_VERSION").ok(),
            environment: env::var("GRAYLOG_ENVIRONMENT").ok(),
            show_console: env::var("GRAYLOG_SHOW_CONSOLE").ok(),
        }
    }
}

/// Caller-supplied configuration overrides.
///
/// Every field set here takes precedence over the corresponding
/// environment default. Built with the fluent setters:
///
/// ```
/// use graylog_client::ConfigOverrides;
/// use graylog_protocol::Environment;
///
/// let overrides = ConfigOverrides::new()
///     .server("graylog.example.com")
///     .input_port(12201)
///     .app_name("billing")
///     .app_version("2.1.0")
///     .environment(Environment::Prod)
///     .show_console(false);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub server: Option<String>,
    pub input_port: Option<u16>,
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub environment: Option<Environment>,
    pub show_console: Option<bool>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn input_port(mut self, port: u16) -> Self {
        self.input_port = Some(port);
        self
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn show_console(mut self, show: bool) -> Self {
        self.show_console = Some(show);
        self
    }
}

/// Merge, normalize and validate one configuration.
pub fn resolve(raw: RawConfig, overrides: &ConfigOverrides) -> Result<ClientConfig, ConfigError> {
    let server = merge_required("server", overrides.server.clone(), raw.server)?;
    let app_name = merge_required("appName", overrides.app_name.clone(), raw.app_name)?;
    let app_version = merge_required("appVersion", overrides.app_version.clone(), raw.app_version)?;

    let input_port = match overrides.input_port {
        Some(port) => port,
        None => parse_port(required("inputPort", raw.input_port)?)?,
    };
    if input_port == 0 {
        return Err(ConfigError::MissingField("inputPort"));
    }

    let environment = match overrides.environment {
        Some(environment) => environment,
        None => required("environment", raw.environment)?.parse()?,
    };

    let show_console = match overrides.show_console {
        Some(show) => show,
        None => match raw.show_console.filter(|s| !s.is_empty()) {
            Some(value) => parse_show_console(&value)?,
            None => true,
        },
    };

    Ok(ClientConfig {
        server,
        input_port,
        app_name,
        app_version,
        environment,
        show_console,
    })
}

fn merge_required(
    field: &'static str,
    override_value: Option<String>,
    raw_value: Option<String>,
) -> Result<String, ConfigError> {
    required(field, override_value.or(raw_value))
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingField(field))
}

fn parse_port(value: String) -> Result<u16, ConfigError> {
    value
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(value))
}

// Strict parse: anything other than true/false fails closed instead of
// silently defaulting.
fn parse_show_console(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidShowConsole(value.to_string())),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
