//! Error types shared across the Graylog client crates

/// Configuration errors raised while resolving or validating a client
/// configuration.
///
/// These are fatal to initialization and surface synchronously to the first
/// caller; the singleton slot is left untouched so a later attempt may retry
/// with corrected values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required configuration field is missing or empty.
    #[error("the `{0}` configuration is required")]
    MissingField(&'static str),

    /// `environment` is not one of the allowed values.
    #[error("the `environment` configuration must be one of: PROD, DEV, STAGING (got `{0}`)")]
    InvalidEnvironment(String),

    /// `inputPort` was given as a string that does not parse to a port number.
    #[error("the `inputPort` configuration is not a valid port: `{0}`")]
    InvalidPort(String),

    /// `showConsole` was given as a string that is neither "true" nor "false".
    #[error("the `showConsole` configuration must be \"true\" or \"false\" (got `{0}`)")]
    InvalidShowConsole(String),
}

/// An unsupported severity name was requested on the stringly call surface.
///
/// Raised per call; other calls and the singleton are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported log level `{level}`")]
pub struct InvocationError {
    /// The level name that failed to resolve.
    pub level: String,
}

impl InvocationError {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }
}
