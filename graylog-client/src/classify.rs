//! Argument classification
//!
//! Partitions a log call's argument list by position and shape. Position 0
//! is the message slot: a non-error value there is the message source only
//! and is excluded entirely from `extra_info` accumulation, while an error
//! at position 0 still counts as an error. Every other argument lands in
//! exactly one class, and encounter order is preserved so errors and
//! residual data aggregate in call order.

use graylog_protocol::{ArgNode, CapturedError};

/// Classification of one argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// An error occurrence, routed to the aggregator.
    Error(CapturedError),
    /// A structured (map or list) value, to be sanitized.
    Structured(ArgNode),
    /// Anything else, kept as its string representation.
    Scalar(String),
}

/// Classify a call's arguments, in encounter order.
pub fn classify(args: Vec<ArgNode>) -> Vec<Classified> {
    args.into_iter()
        .enumerate()
        .filter_map(|(index, arg)| {
            if index == 0 && !arg.is_error() {
                // Message slot, never part of extra_info.
                return None;
            }
            Some(match arg {
                ArgNode::Error(error) => Classified::Error(error),
                node if node.is_structured() => Classified::Structured(node),
                scalar => Classified::Scalar(scalar.to_display_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_non_error_argument_is_excluded() {
        let classified = classify(vec![
            ArgNode::from("User login"),
            ArgNode::from(json!({"userId": 42})),
        ]);

        assert_eq!(classified.len(), 1);
        assert!(matches!(classified[0], Classified::Structured(_)));
    }

    #[test]
    fn first_position_error_still_counts() {
        let classified = classify(vec![ArgNode::Error(CapturedError::new("disk full", "trace"))]);

        assert_eq!(
            classified,
            vec![Classified::Error(CapturedError::new("disk full", "trace"))],
        );
    }

    #[test]
    fn scalars_are_stringified() {
        let classified = classify(vec![
            ArgNode::from("retry"),
            ArgNode::from(3i64),
            ArgNode::from("context"),
        ]);

        assert_eq!(
            classified,
            vec![
                Classified::Scalar("3".to_string()),
                Classified::Scalar("context".to_string()),
            ],
        );
    }

    #[test]
    fn encounter_order_is_preserved() {
        let classified = classify(vec![
            ArgNode::from("msg"),
            ArgNode::from(json!({"a": 1})),
            ArgNode::Error(CapturedError::new("boom", "trace")),
            ArgNode::from(7i64),
        ]);

        assert!(matches!(classified[0], Classified::Structured(_)));
        assert!(matches!(classified[1], Classified::Error(_)));
        assert!(matches!(classified[2], Classified::Scalar(_)));
    }
}
