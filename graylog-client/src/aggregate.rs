//! Per-call error aggregation
//!
//! Accumulates the error occurrences of one log call, in encounter order,
//! and formats them into the combined `error_message` / `error_stack`
//! strings. State is strictly call-scoped: the builder creates a fresh
//! aggregator for every call, so concurrent calls never interleave.

use graylog_protocol::CapturedError;

#[derive(Debug, Default)]
pub struct ErrorAggregator {
    messages: Vec<String>,
    stacks: Vec<String>,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one occurrence, preserving encounter order.
    pub fn record(&mut self, error: CapturedError) {
        self.messages.push(error.message);
        self.stacks.push(error.stack);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Combined error message: a single error stays unprefixed, multiple
    /// errors are numbered and joined with `" | "`.
    pub fn format_messages(&self) -> String {
        if self.messages.len() == 1 {
            return self.messages[0].clone();
        }
        self.messages
            .iter()
            .enumerate()
            .map(|(i, msg)| format!("[Error #{}]: {}", i + 1, msg))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Combined stack traces: a single stack is emitted verbatim with a
    /// trailing newline, multiple stacks each get a numbered header naming
    /// the matching message.
    pub fn format_stacks(&self) -> String {
        if self.stacks.len() == 1 {
            return format!("{}\n", self.stacks[0]);
        }
        self.stacks
            .iter()
            .enumerate()
            .map(|(i, stack)| {
                format!(
                    "[Traceback do erro #{} \"{}\"]:\n{}\n",
                    i + 1,
                    self.messages[i],
                    stack
                )
            })
            .collect()
    }
}
