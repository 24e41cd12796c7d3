//! Configuration and payload model

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language tag carried in every payload's `app_language` field.
pub const APP_LANGUAGE: &str = "Rust";

/// Deployment environment of the logging application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    #[serde(rename = "PROD")]
    Prod,
    #[serde(rename = "DEV")]
    Dev,
    #[serde(rename = "STAGING")]
    Staging,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Prod => "PROD",
            Environment::Dev => "DEV",
            Environment::Staging => "STAGING",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROD" => Ok(Environment::Prod),
            "DEV" => Ok(Environment::Dev),
            "STAGING" => Ok(Environment::Staging),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

/// Validated, immutable client configuration.
///
/// Constructed exactly once per process by the singleton lifecycle and never
/// mutated afterwards, so it is safe to read from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Graylog server host name or address.
    pub server: String,
    /// UDP input port on the Graylog server.
    pub input_port: u16,
    /// Application name, also used as the GELF facility.
    pub app_name: String,
    /// Application version string.
    pub app_version: String,
    /// Deployment environment.
    pub environment: Environment,
    /// Mirror every record to the local console.
    pub show_console: bool,
}

/// Structured payload shipped to Graylog with every record.
///
/// The optional fields are *absent* from serialized output when empty, never
/// `null`: downstream consumers distinguish "no errors" from an empty error
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub app_language: String,
    /// Facility identifier, equal to the application name.
    pub facility: String,
    pub app_version: String,
    pub environment: Environment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_stack: Option<String>,
    /// Pretty-printed JSON of the residual call arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
}

impl Payload {
    /// Static payload skeleton for a configuration; the optional fields are
    /// filled per call by the payload builder.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            app_language: APP_LANGUAGE.to_string(),
            facility: config.app_name.clone(),
            app_version: config.app_version.clone(),
            environment: config.environment,
            error_message: None,
            error_stack: None,
            extra_info: None,
        }
    }
}

/// Acknowledgement payload returned synchronously from every log call,
/// independent of transport outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    /// Capture time, formatted `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Level name the call was made at.
    pub level: String,
    /// Primary log message.
    pub message: String,
    #[serde(flatten)]
    pub payload: Payload,
}
