//! Structure sanitization
//!
//! Structured arguments may carry error occurrences anywhere in their tree.
//! Sanitization rebuilds a filtered `serde_json::Value`, routing every error
//! leaf to the aggregator in encounter order and omitting it from the
//! result, so structured data is always serialization-safe. Rebuilding
//! (rather than deleting keys in place) sidesteps mutate-while-iterating
//! hazards entirely.

use crate::aggregate::ErrorAggregator;
use graylog_protocol::ArgNode;
use serde_json::Value;

/// Sanitize one top-level structured argument.
///
/// Returns `None` when extraction empties the structure, so only meaningful
/// residual data reaches `extra_info`. Containers nested deeper that end up
/// empty stay in place.
pub fn sanitize(node: ArgNode, aggregator: &mut ErrorAggregator) -> Option<Value> {
    match rebuild(node, aggregator) {
        Some(Value::Object(map)) if map.is_empty() => None,
        Some(Value::Array(items)) if items.is_empty() => None,
        other => other,
    }
}

fn rebuild(node: ArgNode, aggregator: &mut ErrorAggregator) -> Option<Value> {
    match node {
        ArgNode::Scalar(value) => Some(value),
        ArgNode::Error(error) => {
            aggregator.record(error);
            None
        }
        ArgNode::Map(entries) => Some(Value::Object(
            entries
                .into_iter()
                .filter_map(|(key, value)| rebuild(value, aggregator).map(|v| (key, v)))
                .collect(),
        )),
        ArgNode::List(items) => Some(Value::Array(
            items
                .into_iter()
                .filter_map(|item| rebuild(item, aggregator))
                .collect(),
        )),
    }
}
