//! Agent loop tests against a scripted transport.

use anyhow::Result;
use gateway::{GatewayConfig, Inference, wire::{ContentBlock, InferenceRequest, InferenceResponse}};
use ocore::{Message, Role};
use orca_agent::{Chat, Runtime};
use serde_json::json;
use std::sync::Mutex;

/// Scripted transport: pops canned responses in order and records every
/// request it sees.
struct Scripted {
    responses: Mutex<Vec<InferenceResponse>>,
    requests: Mutex<Vec<InferenceRequest>>,
}

impl Scripted {
    fn new(mut responses: Vec<InferenceResponse>) -> Self {
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

impl Inference for &Scripted {
    async fn infer(&self, request: &InferenceRequest) -> Result<InferenceResponse> {
        self.requests.lock().expect("lock").push(request.clone());
        self.responses
            .lock()
            .expect("lock")
            .pop()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

fn response(content: Vec<ContentBlock>, episode_id: Option<&str>) -> InferenceResponse {
    InferenceResponse {
        id: "inf".into(),
        variant_name: "gpt4_mini".into(),
        content,
        episode_id: episode_id.map(str::to_owned),
    }
}

fn tool_call(name: &str, arguments: serde_json::Value) -> ContentBlock {
    ContentBlock::ToolCall {
        name: name.into(),
        arguments: Some(arguments.as_object().expect("object").clone()),
        id: None,
    }
}

#[tokio::test]
async fn plain_turn_appends_two_messages() {
    let transport = Scripted::new(vec![response(vec![ContentBlock::text("hi there")], None)]);
    let mut runtime = Runtime::new(&transport, &GatewayConfig::default());
    let mut chat = Chat::new();

    let turn = runtime
        .send(&mut chat, Message::user("hello"))
        .await
        .expect("turn");

    assert_eq!(turn.len(), 2);
    assert_eq!(turn[0].role, Role::User);
    assert_eq!(turn[1].role, Role::Assistant);
    assert_eq!(turn[1].content, "hi there");
    assert_eq!(chat.len(), 2);
}

#[tokio::test]
async fn tool_call_round_trip() {
    let transport = Scripted::new(vec![
        response(
            vec![
                ContentBlock::text("let me compute that"),
                tool_call("calculator", json!({ "expression": "2 + 2" })),
            ],
            Some("ep-1"),
        ),
        response(vec![ContentBlock::text("the answer is 4")], None),
    ]);
    let mut runtime = Runtime::new(&transport, &GatewayConfig::default()).with_builtin_tools();
    let mut chat = Chat::new();

    let turn = runtime
        .send(&mut chat, Message::user("what is 2 + 2?"))
        .await
        .expect("turn");

    // user, assistant w/ call, tool result, final assistant.
    let roles: Vec<_> = turn.iter().map(|m| m.role).collect();
    assert_eq!(roles, [Role::User, Role::Assistant, Role::Tool, Role::Assistant]);
    assert_eq!(turn[1].tool_calls.len(), 1);
    assert_eq!(turn[2].tool_name, "calculator");
    assert_eq!(turn[2].tool_call_id, "call_0");
    assert_eq!(turn[2].content, "2 + 2 = 4");
    assert_eq!(turn[3].content, "the answer is 4");

    // The second request carries the tool result and the episode token.
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].episode_id, None);
    assert_eq!(requests[1].episode_id.as_deref(), Some("ep-1"));
    assert_eq!(requests[1].input.messages.len(), 3);
}

#[tokio::test]
async fn unknown_tool_reports_unavailable() {
    let transport = Scripted::new(vec![
        response(vec![tool_call("teleport", json!({}))], None),
        response(vec![ContentBlock::text("sorry")], None),
    ]);
    let mut runtime = Runtime::new(&transport, &GatewayConfig::default()).with_builtin_tools();
    let mut chat = Chat::new();

    let turn = runtime
        .send(&mut chat, Message::user("beam me up"))
        .await
        .expect("turn");

    assert_eq!(turn[2].role, Role::Tool);
    assert_eq!(turn[2].content, "function teleport not available");
}

#[tokio::test]
async fn episode_survives_across_turns() {
    let transport = Scripted::new(vec![
        response(vec![ContentBlock::text("one")], Some("ep-1")),
        response(vec![ContentBlock::text("two")], None),
        response(vec![ContentBlock::text("three")], None),
    ]);
    let mut runtime = Runtime::new(&transport, &GatewayConfig::default());
    let mut chat = Chat::new();

    runtime.send(&mut chat, Message::user("a")).await.expect("turn");
    runtime.send(&mut chat, Message::user("b")).await.expect("turn");
    runtime.send(&mut chat, Message::user("c")).await.expect("turn");

    let requests = transport.requests();
    assert_eq!(requests[0].episode_id, None);
    assert_eq!(requests[1].episode_id.as_deref(), Some("ep-1"));
    // Still "ep-1" after a response that carried no token.
    assert_eq!(requests[2].episode_id.as_deref(), Some("ep-1"));
    assert_eq!(runtime.episode().current(), Some("ep-1"));
}

#[tokio::test]
async fn transport_error_leaves_episode_untouched() {
    let transport = Scripted::new(vec![response(vec![], Some("ep-1"))]);
    let mut runtime = Runtime::new(&transport, &GatewayConfig::default());
    let mut chat = Chat::new();

    runtime.send(&mut chat, Message::user("a")).await.expect("turn");
    // Script exhausted: the next call fails at the transport.
    let err = runtime.send(&mut chat, Message::user("b")).await;
    assert!(err.is_err());
    assert_eq!(runtime.episode().current(), Some("ep-1"));
}
