//! Per-call payload construction
//!
//! One call, one pipeline pass: fresh call-scoped state, primary message
//! extraction, classification, sanitization feeding the error aggregator,
//! then assembly of the outbound [`Payload`] and the echoed
//! [`ResponsePayload`].

use crate::aggregate::ErrorAggregator;
use crate::classify::{classify, Classified};
use crate::sanitize::sanitize;
use chrono::Local;
use graylog_protocol::{ArgNode, ClientConfig, LogLevel, Payload, ResponsePayload};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Message used when the call carries no usable message argument.
pub const NO_MESSAGE: &str = "No message provided";

/// Everything one log call produces, ready for dispatch.
#[derive(Debug, Clone)]
pub struct BuiltCall {
    pub message: String,
    pub payload: Payload,
    pub response: ResponsePayload,
}

/// Capture-time timestamp, `YYYY-MM-DD HH:MM:SS`.
pub fn capture_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Run the enrichment pipeline over one call's arguments.
pub fn build(
    config: &ClientConfig,
    level: LogLevel,
    args: Vec<ArgNode>,
    timestamp: &str,
) -> Result<BuiltCall, serde_json::Error> {
    let message = extract_message(&args);

    // Call-scoped accumulators; nothing outlives this call.
    let mut aggregator = ErrorAggregator::new();
    let mut extras: Vec<Value> = Vec::new();

    for item in classify(args) {
        match item {
            Classified::Error(error) => aggregator.record(error),
            Classified::Structured(node) => {
                if let Some(value) = sanitize(node, &mut aggregator) {
                    extras.push(value);
                }
            }
            Classified::Scalar(text) => extras.push(Value::String(text)),
        }
    }

    let mut payload = Payload::from_config(config);
    if !aggregator.is_empty() {
        payload.error_message = Some(aggregator.format_messages());
        payload.error_stack = Some(aggregator.format_stacks());
    }
    payload.extra_info = serialize_extras(&extras)?;

    let response = ResponsePayload {
        timestamp: timestamp.to_string(),
        level: level.as_str().to_string(),
        message: message.clone(),
        payload: payload.clone(),
    };

    Ok(BuiltCall {
        message,
        payload,
        response,
    })
}

/// Primary message: the first argument stringified. An absent first
/// argument or an error occurrence in that slot yields the fixed fallback.
fn extract_message(args: &[ArgNode]) -> String {
    match args.first() {
        Some(node) if !node.is_error() => node.to_display_string(),
        _ => NO_MESSAGE.to_string(),
    }
}

/// Residual arguments as 4-space-indented JSON. A single residual
/// serializes bare, several serialize as an array.
fn serialize_extras(extras: &[Value]) -> Result<Option<String>, serde_json::Error> {
    let value = match extras {
        [] => return Ok(None),
        [single] => single.clone(),
        many => Value::Array(many.to_vec()),
    };

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    let text = String::from_utf8(buf).map_err(serde::ser::Error::custom)?;
    Ok(Some(text))
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod builder_tests;
