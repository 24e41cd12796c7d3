//! Structured log-shipping client for Graylog
//!
//! This crate accepts log calls at varying severities, enriches them with
//! contextual metadata (application name/version, environment, error details
//! with stack traces, arbitrary extra arguments), assembles a structured
//! payload and ships it to a Graylog input over GELF/UDP, optionally
//! mirroring a human-readable rendering to the console.
//!
//! # Example
//!
//! ```rust,no_run
//! use graylog_client::{get_logger, ConfigOverrides};
//! use graylog_protocol::{ArgNode, Environment};
//! use serde_json::json;
//!
//! let overrides = ConfigOverrides::new()
//!     .server("graylog.example.com")
//!     .input_port(12201)
//!     .app_name("billing")
//!     .app_version("2.1.0")
//!     .environment(Environment::Prod);
//!
//! let logger = get_logger(Some(overrides)).expect("valid configuration");
//! logger
//!     .info(vec![
//!         ArgNode::from("User login"),
//!         ArgNode::from(json!({"userId": 42})),
//!     ])
//!     .expect("record shipped");
//! ```

pub mod aggregate;
pub mod builder;
pub mod classify;
pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod sanitize;

// Re-export main types for convenience
pub use client::Client;
pub use config::{ConfigOverrides, RawConfig};
pub use error::{Error, Result};
pub use graylog_protocol::{
    ArgNode, CapturedError, ClientConfig, ConfigError, Environment, InvocationError, LogLevel,
    Payload, ResponsePayload,
};
pub use graylog_transport::{Transport, TransportError};

use std::sync::{Arc, Mutex};
use tracing::debug;

// Process-wide client slot. Initialization is serialized by the lock; a
// failed initialization leaves the slot empty so a later call may retry.
static INSTANCE: Mutex<Option<Arc<Client>>> = Mutex::new(None);

/// Return the process-wide client, configuring it on first call.
///
/// The first caller resolves configuration (environment defaults merged
/// with `overrides`), opens the UDP transport and stores the client. Every
/// subsequent call returns that same client and **ignores** its `overrides`
/// argument: configuration is fixed for the process lifetime.
///
/// Concurrent first calls are safe: exactly one performs initialization,
/// the others block until it completes and then receive the same instance.
pub fn get_logger(overrides: Option<ConfigOverrides>) -> Result<Arc<Client>> {
    let mut slot = INSTANCE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(client) = slot.as_ref() {
        return Ok(Arc::clone(client));
    }

    let config = config::resolve(RawConfig::from_env(), &overrides.unwrap_or_default())?;
    let client = Arc::new(Client::connect(config)?);
    debug!(
        facility = %client.config().app_name,
        environment = %client.config().environment,
        "graylog client initialized"
    );

    *slot = Some(Arc::clone(&client));
    Ok(client)
}

/// Drop the process-wide client so the next [`get_logger`] call
/// reconfigures from scratch. Test-isolation hook; production code should
/// never need it.
pub fn reset_logger() {
    let mut slot = INSTANCE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = None;
}
