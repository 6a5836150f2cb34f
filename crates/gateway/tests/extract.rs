//! Content extraction tests.

use compact_str::CompactString;
use orca_gateway::{extract, wire::ContentBlock};
use serde_json::Map;

fn tool_call(id: Option<&str>) -> ContentBlock {
    ContentBlock::ToolCall {
        name: "calculator".into(),
        arguments: None,
        id: id.map(CompactString::from),
    }
}

#[test]
fn text_concatenated_in_order() {
    // Tool-call interleaving must not affect the concatenation.
    let blocks = vec![
        ContentBlock::text("A"),
        tool_call(Some("call-x")),
        ContentBlock::text("B"),
        tool_call(Some("call-y")),
        ContentBlock::text("C"),
    ];

    let (text, calls) = extract(&blocks);
    assert_eq!(text, "ABC");
    assert_eq!(calls.len(), 2);
}

#[test]
fn fallback_ids_are_deterministic() {
    let blocks = vec![tool_call(None), tool_call(None), tool_call(None)];

    let (_, calls) = extract(&blocks);
    let ids: Vec<_> = calls.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["call_0", "call_1", "call_2"]);

    // Stable across repeated extraction of the same response.
    let (_, again) = extract(&blocks);
    assert_eq!(calls, again);
}

#[test]
fn fallback_counter_counts_all_extracted_calls() {
    let blocks = vec![tool_call(Some("call-x")), tool_call(None)];

    let (_, calls) = extract(&blocks);
    assert_eq!(calls[0].id, "call-x");
    assert_eq!(calls[1].id, "call_1");
}

#[test]
fn missing_arguments_default_to_empty_map() {
    let (_, calls) = extract(&[tool_call(None)]);
    assert_eq!(calls[0].arguments, Map::new());
}

#[test]
fn empty_content_yields_nothing() {
    let (text, calls) = extract(&[]);
    assert_eq!(text, "");
    assert!(calls.is_empty());
}
