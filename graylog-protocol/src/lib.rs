//! Core types for the Graylog log-shipping client
//!
//! This crate provides the building blocks shared by the transport and
//! client crates:
//! - Log levels with their GELF/syslog severity mapping
//! - The outbound [`Payload`] and the per-call [`ResponsePayload`]
//! - The [`ArgNode`] tagged argument tree and [`CapturedError`]
//! - GELF 1.1 wire encoding
//! - Protocol-level error types

pub mod argument;
pub mod error;
pub mod level;
pub mod model;
pub mod wire;

// Re-export main types for convenience
pub use argument::{ArgNode, CapturedError};
pub use error::{ConfigError, InvocationError};
pub use level::LogLevel;
pub use model::{ClientConfig, Environment, Payload, ResponsePayload, APP_LANGUAGE};
pub use wire::encode_gelf;
