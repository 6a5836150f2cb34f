//! Conversation messages.

use crate::ToolCall;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A message in a conversation.
///
/// History ordering is significant: the gateway adapter maps each message
/// to exactly one wire message, in order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Message {
    /// The role of the message author.
    pub role: Role,

    /// The text content of the message.
    pub content: String,

    /// Tool calls requested by the model (assistant messages only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,

    /// The id of the tool call this message answers (tool messages only).
    #[serde(default, skip_serializing_if = "CompactString::is_empty")]
    pub tool_call_id: CompactString,

    /// The name of the tool that produced this result (tool messages only).
    #[serde(default, skip_serializing_if = "CompactString::is_empty")]
    pub tool_name: CompactString,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Create a new tool-result message answering the given tool call.
    pub fn tool(
        content: impl Into<String>,
        tool_call_id: impl Into<CompactString>,
        tool_name: impl Into<CompactString>,
    ) -> Self {
        Self {
            role: Role::Tool,
            content: content.into(),
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            ..Default::default()
        }
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Attach tool calls to this message.
    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCall>) -> Self {
        self.tool_calls = tool_calls;
        self
    }
}

/// The role of a message author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The user role.
    #[default]
    User,
    /// The assistant role.
    Assistant,
    /// The tool role, carrying a prior tool call's result.
    Tool,
    /// The system role.
    ///
    /// Present in the generic model for hosts that keep a system prompt in
    /// history; the gateway path rejects it because the remote gateway owns
    /// the system template per function.
    System,
}
