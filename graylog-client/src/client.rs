//! The Graylog client
//!
//! One validated configuration, one transport handle, one enumerated set of
//! severity methods all funneling into a single `emit` path.

use crate::builder::{build, capture_timestamp};
use crate::console;
use crate::error::Result;
use graylog_protocol::{ArgNode, ClientConfig, LogLevel, ResponsePayload};
use graylog_transport::{Transport, UdpTransport};
use std::io::Write;
use std::sync::Mutex;
use tracing::debug;

/// Log-shipping client bound to one Graylog input.
///
/// Safe to share across threads: the configuration is immutable, all
/// per-call state is call-local, the transport synchronizes itself and the
/// console sink is guarded so concurrent blocks never interleave.
pub struct Client {
    config: ClientConfig,
    transport: Box<dyn Transport>,
    console: Mutex<Box<dyn Write + Send>>,
}

impl Client {
    /// Build a client over an arbitrary transport (tests inject mocks here).
    /// Console mirroring goes to stdout.
    pub fn new(config: ClientConfig, transport: Box<dyn Transport>) -> Self {
        Self::with_console(config, transport, Box::new(std::io::stdout()))
    }

    /// Build a client with an explicit console sink instead of stdout.
    pub fn with_console(
        config: ClientConfig,
        transport: Box<dyn Transport>,
        console: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            config,
            transport,
            console: Mutex::new(console),
        }
    }

    /// Build a client with the standard GELF UDP transport bound to the
    /// configured server and input port, tagged with the app name.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let transport =
            UdpTransport::connect(&config.server, config.input_port, &config.app_name)?;
        Ok(Self::new(config, Box::new(transport)))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn debug(&self, args: Vec<ArgNode>) -> Result<ResponsePayload> {
        self.emit(LogLevel::Debug, args)
    }

    pub fn info(&self, args: Vec<ArgNode>) -> Result<ResponsePayload> {
        self.emit(LogLevel::Info, args)
    }

    pub fn warning(&self, args: Vec<ArgNode>) -> Result<ResponsePayload> {
        self.emit(LogLevel::Warning, args)
    }

    pub fn error(&self, args: Vec<ArgNode>) -> Result<ResponsePayload> {
        self.emit(LogLevel::Error, args)
    }

    pub fn critical(&self, args: Vec<ArgNode>) -> Result<ResponsePayload> {
        self.emit(LogLevel::Critical, args)
    }

    /// Stringly entry point: resolve a level name and emit. Unknown names
    /// fail with `InvocationError` without touching any other state.
    pub fn log(&self, level: &str, args: Vec<ArgNode>) -> Result<ResponsePayload> {
        let level: LogLevel = level.parse()?;
        self.emit(level, args)
    }

    fn emit(&self, level: LogLevel, args: Vec<ArgNode>) -> Result<ResponsePayload> {
        let timestamp = capture_timestamp();
        let built = build(&self.config, level, args, &timestamp)?;

        // Console mirroring is produced from the already-built payload and
        // must happen whatever the transport outcome. A failing sink never
        // fails the log call.
        if self.config.show_console {
            let block =
                console::render(&self.config, &timestamp, level, &built.message, &built.payload);
            let mut sink = self.console.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let _ = writeln!(sink, "{block}");
        }

        self.transport.send(level, &built.message, &built.payload)?;
        debug!(level = %level, endpoint = %self.transport.endpoint(), "log record shipped");

        Ok(built.response)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
