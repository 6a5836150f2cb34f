//! Wire types for the inference gateway's JSON protocol.
//!
//! Request: `{function_name, variant_name, input: {messages}, episode_id?}`.
//! Response: `{id, variant_name, content: [blocks], episode_id?}` where each
//! block is either free text or a structured tool-call request. Every
//! optional field is declared here with a defined default and resolved once
//! at parse time.

use compact_str::CompactString;
use ocore::Role;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The request body for a gateway inference call.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InferenceRequest {
    /// The gateway function to invoke.
    pub function_name: String,

    /// The variant (model/provider configuration) to use.
    pub variant_name: String,

    /// The conversation input.
    pub input: InferenceInput,

    /// Continuity token correlating this call into a logical session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<String>,
}

/// The input payload of an inference request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InferenceInput {
    /// The ordered message list.
    pub messages: Vec<InputMessage>,
}

/// A single gateway-native input message.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InputMessage {
    /// The role of the message.
    pub role: Role,

    /// The content of the message.
    pub content: InputContent,
}

/// Input message content: plain text or structured blocks.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InputContent {
    /// Plain text content.
    Text(String),
    /// Structured content blocks.
    Blocks(Vec<InputBlock>),
}

/// A structured input content block.
///
/// Tool results travel as user-authored blocks because the gateway has no
/// first-class tool role on this path.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputBlock {
    /// The result of a previously requested tool call.
    ToolResult {
        /// The name of the tool that ran.
        name: CompactString,
        /// The textual result.
        result: String,
        /// The id of the originating tool call.
        id: CompactString,
    },
}

/// A gateway inference response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InferenceResponse {
    /// Unique identifier of this inference.
    pub id: String,

    /// The variant that served the call.
    pub variant_name: String,

    /// The ordered content blocks. Absent content parses as empty.
    #[serde(default)]
    pub content: Vec<ContentBlock>,

    /// Continuity token for subsequent calls, when the gateway issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<String>,
}

/// One unit of a response payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Free text.
    Text {
        /// The text fragment.
        text: String,
    },
    /// A structured tool-call request.
    ToolCall {
        /// The name of the tool to call.
        name: CompactString,
        /// The arguments. Missing on the wire parses as `None` and is
        /// defaulted to an empty map at extraction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        arguments: Option<Map<String, Value>>,
        /// The tool call id. Missing on the wire parses as `None`; the
        /// extractor generates a deterministic fallback.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<CompactString>,
    },
}

impl ContentBlock {
    /// Create a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}
