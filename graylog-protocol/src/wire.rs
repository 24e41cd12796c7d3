//! GELF 1.1 wire encoding
//!
//! One datagram per record: a JSON object with the mandatory GELF fields
//! (`version`, `host`, `short_message`, `timestamp`, `level`) and every
//! payload field carried as an underscore-prefixed additional field.
//! Chunking and compression are not implemented; records are shipped as-is.

use crate::level::LogLevel;
use crate::model::Payload;
use serde_json::{Map, Value};

/// GELF protocol version emitted in every record.
pub const GELF_VERSION: &str = "1.1";

/// Encode one log record as a GELF 1.1 JSON datagram body.
///
/// `host` identifies the sender (the client uses the facility here) and
/// `timestamp` is the capture time in unix seconds.
pub fn encode_gelf(
    level: LogLevel,
    message: &str,
    payload: &Payload,
    host: &str,
    timestamp: f64,
) -> Result<Vec<u8>, serde_json::Error> {
    let mut record = Map::new();
    record.insert("version".to_string(), Value::from(GELF_VERSION));
    record.insert("host".to_string(), Value::from(host));
    record.insert("short_message".to_string(), Value::from(message));
    record.insert("timestamp".to_string(), Value::from(timestamp));
    record.insert(
        "level".to_string(),
        Value::from(level.syslog_severity()),
    );

    // Payload fields become additional fields; absent options stay absent.
    let fields = serde_json::to_value(payload)?;
    if let Value::Object(fields) = fields {
        for (key, value) in fields {
            record.insert(format!("_{key}"), value);
        }
    }

    serde_json::to_vec(&Value::Object(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClientConfig, Environment};

    fn payload() -> Payload {
        Payload::from_config(&ClientConfig {
            server: "localhost".to_string(),
            input_port: 12201,
            app_name: "billing".to_string(),
            app_version: "2.1.0".to_string(),
            environment: Environment::Dev,
            show_console: false,
        })
    }

    #[test]
    fn encodes_mandatory_fields() {
        let bytes = encode_gelf(LogLevel::Warning, "retry", &payload(), "billing", 1000.5).unwrap();
        let record: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(record["version"], "1.1");
        assert_eq!(record["host"], "billing");
        assert_eq!(record["short_message"], "retry");
        assert_eq!(record["timestamp"], 1000.5);
        assert_eq!(record["level"], 4);
    }

    #[test]
    fn payload_fields_are_underscore_prefixed() {
        let mut payload = payload();
        payload.error_message = Some("timeout".to_string());

        let bytes = encode_gelf(LogLevel::Error, "retry", &payload, "billing", 0.0).unwrap();
        let record: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(record["_app_language"], "Rust");
        assert_eq!(record["_facility"], "billing");
        assert_eq!(record["_environment"], "DEV");
        assert_eq!(record["_error_message"], "timeout");
        assert!(record.get("_error_stack").is_none());
        assert!(record.get("_extra_info").is_none());
    }
}
