//! Transport layer for the Graylog client
//!
//! Delivery is a send-only datagram channel bound to the configured Graylog
//! input, tagged with a facility string. Semantics are fire-and-forget:
//! a send either hands the datagram to the network or fails synchronously;
//! there is no acknowledgement, retry or batching.

pub mod udp;

use graylog_protocol::{LogLevel, Payload};
use thiserror::Error as ThisError;

pub use udp::UdpTransport;

/// Transport failures, surfaced synchronously to the log caller.
#[derive(Debug, ThisError)]
pub enum TransportError {
    /// The configured endpoint did not resolve to a socket address.
    #[error("cannot resolve graylog endpoint {0}")]
    Resolve(String),

    /// Socket setup or send failed.
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be encoded for the wire.
    #[error("failed to encode GELF record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Send-only log record channel.
pub trait Transport: Send + Sync {
    /// Ship one record. Best-effort: success means the datagram left the
    /// local socket, not that the endpoint received it.
    fn send(&self, level: LogLevel, message: &str, payload: &Payload)
        -> Result<(), TransportError>;

    /// Human-readable endpoint description, for diagnostics.
    fn endpoint(&self) -> String;
}
