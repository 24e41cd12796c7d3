//! Client-level error type

use graylog_protocol::{ConfigError, InvocationError};
use graylog_transport::TransportError;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Umbrella error for the client surface.
///
/// Each variant maps to one failure class: configuration problems are fatal
/// to initialization (and retryable, the singleton slot stays empty),
/// invocation and transport failures are per-call and never affect other
/// calls or the shared client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
