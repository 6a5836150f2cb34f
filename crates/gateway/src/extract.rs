//! Normalizes a response's heterogeneous content blocks.

use crate::wire::ContentBlock;
use compact_str::format_compact;
use ocore::ToolCall;

/// Extract `(text, tool_calls)` from an ordered block sequence.
///
/// Text blocks are concatenated in order with no separator; tool-call
/// blocks are converted in encounter order. A block missing its `id` gets
/// the deterministic fallback `call_{n}` where `n` is the zero-based count
/// of tool calls already extracted, so repeated extraction of the same
/// response yields identical ids. Missing arguments become an empty map.
pub fn extract(blocks: &[ContentBlock]) -> (String, Vec<ToolCall>) {
    let mut text = String::new();
    let mut calls = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Text { text: fragment } => text.push_str(fragment),
            ContentBlock::ToolCall {
                name,
                arguments,
                id,
            } => {
                let id = id
                    .clone()
                    .unwrap_or_else(|| format_compact!("call_{}", calls.len()));
                calls.push(ToolCall::new(
                    id,
                    name.clone(),
                    arguments.clone().unwrap_or_default(),
                ));
            }
        }
    }

    (text, calls)
}
