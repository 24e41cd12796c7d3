//! Minimal end-to-end usage: configure once, log at a few severities.
//!
//! Point it at a real Graylog UDP input, or at `nc -ul 12201` to watch the
//! GELF datagrams locally:
//!
//! ```sh
//! cargo run --example basic
//! ```

use graylog_client::{get_logger, ConfigOverrides};
use graylog_protocol::{ArgNode, Environment};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let overrides = ConfigOverrides::new()
        .server("127.0.0.1")
        .input_port(12201)
        .app_name("example-app")
        .app_version("0.1.0")
        .environment(Environment::Dev)
        .show_console(true);

    let logger = get_logger(Some(overrides))?;

    logger.info(vec![
        ArgNode::from("User login"),
        ArgNode::from(json!({"userId": 42})),
    ])?;

    let io_error = std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout");
    let response = logger.warning(vec![
        ArgNode::from("retry"),
        ArgNode::error(&io_error),
        ArgNode::from(json!({"attempt": 3})),
    ])?;

    println!("acknowledged: {}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
