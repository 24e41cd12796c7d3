//! Tagged argument tree for log calls
//!
//! Call arguments are heterogeneous: plain messages, captured errors,
//! nested structured data, scalars. They are modeled as a tagged tree so
//! that errors embedded anywhere inside structured data can be extracted by
//! rebuilding a filtered tree instead of deleting keys from a
//! dynamically-typed structure mid-iteration.

use serde_json::Value;
use std::backtrace::Backtrace;
use std::error::Error as StdError;

/// One error occurrence: a human-readable message plus a rendered stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    pub message: String,
    pub stack: String,
}

impl CapturedError {
    /// Build from explicit message and stack strings.
    ///
    /// Used for errors whose trace was rendered elsewhere, and by tests that
    /// need deterministic stacks.
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// Capture an error at the call site: message from `Display`, stack from
    /// the rendered source chain followed by a captured backtrace.
    pub fn capture(error: &(dyn StdError + 'static)) -> Self {
        let message = error.to_string();

        let mut stack = format!("Error: {message}\n");
        let mut source = error.source();
        while let Some(cause) = source {
            stack.push_str(&format!("Caused by: {cause}\n"));
            source = cause.source();
        }
        stack.push_str(&Backtrace::force_capture().to_string());

        Self { message, stack }
    }
}

/// One node of the argument tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgNode {
    /// Scalar leaf: a JSON string, number, boolean or null.
    Scalar(Value),
    /// Mapping node, insertion-ordered.
    Map(Vec<(String, ArgNode)>),
    /// Sequence node.
    List(Vec<ArgNode>),
    /// Error leaf, extracted during sanitization.
    Error(CapturedError),
}

impl ArgNode {
    /// Capture an error argument.
    pub fn error(error: &(dyn StdError + 'static)) -> Self {
        ArgNode::Error(CapturedError::capture(error))
    }

    /// Mapping node from key/node pairs.
    pub fn map(entries: impl IntoIterator<Item = (String, ArgNode)>) -> Self {
        ArgNode::Map(entries.into_iter().collect())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ArgNode::Error(_))
    }

    /// Structured arguments are mapping or sequence nodes.
    pub fn is_structured(&self) -> bool {
        matches!(self, ArgNode::Map(_) | ArgNode::List(_))
    }

    /// String form used when the node serves as the primary message or as a
    /// scalar `extra_info` entry: string scalars yield their inner text,
    /// other scalars their JSON rendering.
    pub fn to_display_string(&self) -> String {
        match self {
            ArgNode::Scalar(Value::String(s)) => s.clone(),
            ArgNode::Scalar(other) => other.to_string(),
            ArgNode::Error(err) => err.message.clone(),
            node => Value::from(node.clone()).to_string(),
        }
    }
}

impl From<Value> for ArgNode {
    /// Decompose a JSON value into the tree: objects become map nodes,
    /// arrays become list nodes, everything else a scalar leaf.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                ArgNode::Map(map.into_iter().map(|(k, v)| (k, ArgNode::from(v))).collect())
            }
            Value::Array(items) => {
                ArgNode::List(items.into_iter().map(ArgNode::from).collect())
            }
            scalar => ArgNode::Scalar(scalar),
        }
    }
}

impl From<ArgNode> for Value {
    /// Rebuild a JSON value, rendering error leaves by their message.
    ///
    /// Sanitization strips error leaves before structured data is
    /// serialized; this fallback only matters for direct conversions.
    fn from(node: ArgNode) -> Self {
        match node {
            ArgNode::Scalar(value) => value,
            ArgNode::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
            ArgNode::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            ArgNode::Error(err) => Value::String(err.message),
        }
    }
}

impl From<&str> for ArgNode {
    fn from(s: &str) -> Self {
        ArgNode::Scalar(Value::String(s.to_string()))
    }
}

impl From<String> for ArgNode {
    fn from(s: String) -> Self {
        ArgNode::Scalar(Value::String(s))
    }
}

impl From<bool> for ArgNode {
    fn from(b: bool) -> Self {
        ArgNode::Scalar(Value::Bool(b))
    }
}

impl From<i64> for ArgNode {
    fn from(n: i64) -> Self {
        ArgNode::Scalar(Value::from(n))
    }
}

impl From<u64> for ArgNode {
    fn from(n: u64) -> Self {
        ArgNode::Scalar(Value::from(n))
    }
}

impl From<f64> for ArgNode {
    fn from(n: f64) -> Self {
        ArgNode::Scalar(Value::from(n))
    }
}
