//! Wire format tests: the JSON shapes the gateway actually speaks.

use ocore::{Message, Role};
use orca_gateway::{
    Episode, Gateway, Translator,
    wire::{ContentBlock, InferenceResponse},
};
use serde_json::json;

#[test]
fn request_serializes_to_gateway_shape() {
    let history = vec![
        Message::user("hello"),
        Message::tool("sunny", "call_0", "get_weather"),
    ];
    let request = Translator::new("agent_chat", "gpt4_mini")
        .outbound(&history, &Episode::new())
        .expect("request");

    let value = serde_json::to_value(&request).expect("json");
    assert_eq!(
        value,
        json!({
            "function_name": "agent_chat",
            "variant_name": "gpt4_mini",
            "input": {
                "messages": [
                    { "role": "user", "content": "hello" },
                    { "role": "user", "content": [{
                        "type": "tool_result",
                        "name": "get_weather",
                        "result": "sunny",
                        "id": "call_0",
                    }]},
                ],
            },
        })
    );
}

#[test]
fn episode_id_serialized_when_present() {
    let mut episode = Episode::new();
    let translator = Translator::new("agent_chat", "gpt4_mini");
    translator.inbound(
        &InferenceResponse {
            id: "inf-1".into(),
            variant_name: "gpt4_mini".into(),
            content: vec![],
            episode_id: Some("ep-1".into()),
        },
        &mut episode,
    );

    let request = translator
        .outbound(&[Message::user("hi")], &episode)
        .expect("request");
    let value = serde_json::to_value(&request).expect("json");
    assert_eq!(value["episode_id"], json!("ep-1"));
}

#[test]
fn response_parses_full_payload() {
    let text = r#"{
        "id": "0195c6a0",
        "variant_name": "gpt4_mini",
        "episode_id": "ep-42",
        "content": [
            { "type": "text", "text": "checking the weather" },
            { "type": "tool_call", "name": "get_weather",
              "arguments": { "location": "Tokyo" }, "id": "call-1" }
        ]
    }"#;

    let response: InferenceResponse = serde_json::from_str(text).expect("parse");
    assert_eq!(response.episode_id.as_deref(), Some("ep-42"));
    assert_eq!(response.content.len(), 2);
    match &response.content[1] {
        ContentBlock::ToolCall { name, arguments, id } => {
            assert_eq!(name, "get_weather");
            assert_eq!(id.as_deref(), Some("call-1"));
            assert_eq!(arguments.as_ref().expect("args")["location"], "Tokyo");
        }
        other => panic!("expected tool_call block, got {other:?}"),
    }
}

#[test]
fn response_tolerates_missing_optional_fields() {
    // No episode_id, no content, and a tool call without arguments or id.
    let bare: InferenceResponse =
        serde_json::from_str(r#"{ "id": "x", "variant_name": "v" }"#).expect("parse");
    assert_eq!(bare.episode_id, None);
    assert!(bare.content.is_empty());

    let sparse: InferenceResponse = serde_json::from_str(
        r#"{
            "id": "x",
            "variant_name": "v",
            "content": [{ "type": "tool_call", "name": "calculator" }]
        }"#,
    )
    .expect("parse");
    match &sparse.content[0] {
        ContentBlock::ToolCall { arguments, id, .. } => {
            assert_eq!(*arguments, None);
            assert_eq!(*id, None);
        }
        other => panic!("expected tool_call block, got {other:?}"),
    }
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Assistant).expect("json"), json!("assistant"));
    assert_eq!(serde_json::to_value(Role::Tool).expect("json"), json!("tool"));
}

#[test]
fn gateway_endpoint_from_base_url() {
    let client = reqwest::Client::new();
    let gateway = Gateway::http(client.clone(), "http://localhost:3000").expect("gateway");
    assert_eq!(gateway.endpoint(), "http://localhost:3000/inference");

    let trailing = Gateway::http(client, "http://localhost:3000/").expect("gateway");
    assert_eq!(trailing.endpoint(), "http://localhost:3000/inference");
}
