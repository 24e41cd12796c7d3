//! Console rendering
//!
//! When `show_console` is enabled, every record is mirrored to stdout as a
//! human-readable block. The block is built as a `String` so it can be
//! asserted against; rendering never affects the payloads and happens
//! regardless of transport outcome.

use graylog_protocol::{ClientConfig, LogLevel, Payload};

/// Render the console block for one record.
pub fn render(
    config: &ClientConfig,
    timestamp: &str,
    level: LogLevel,
    message: &str,
    payload: &Payload,
) -> String {
    let mut out = format!("========= GRAYLOG MESSAGE [{timestamp}]: =========\n");

    out.push_str(&format!(
        "Application: {} | Version: {} | Environment: {}\n",
        config.app_name, config.app_version, config.environment,
    ));

    out.push_str(&format!("[{level}] \"{message}\"\n"));

    if let Some(error_message) = payload.error_message.as_deref() {
        out.push_str(&format!("Error message: \"{}\"\n", error_message.trim()));
    }

    if let Some(error_stack) = payload.error_stack.as_deref() {
        out.push_str(&format!("Traceback:\n{}\n", error_stack.trim()));
    }

    if let Some(extra_info) = payload.extra_info.as_deref() {
        out.push_str(&format!("Extra info:\n{}\n", extra_info.trim()));
    }

    out.push_str("================= END OF GRAYLOG MESSAGE =================");
    out
}
