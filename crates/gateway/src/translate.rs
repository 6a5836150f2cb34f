//! Translation between conversation history and the gateway wire format.

use crate::{
    Episode, extract,
    wire::{InferenceInput, InferenceRequest, InferenceResponse, InputBlock, InputContent, InputMessage},
};
use ocore::{Message, Role, TranslateError};

/// Translates conversation history for one gateway function/variant pair.
///
/// Stateless per call: outbound translation reads the episode token,
/// inbound translation is the single place the episode is updated.
#[derive(Debug, Clone)]
pub struct Translator {
    /// The gateway function to invoke.
    pub function_name: String,

    /// The variant to request.
    pub variant_name: String,
}

impl Translator {
    /// Create a translator for the given function and variant.
    pub fn new(function_name: impl Into<String>, variant_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            variant_name: variant_name.into(),
        }
    }

    /// Build the outbound request from the full ordered history.
    ///
    /// Each history entry maps to exactly one wire message, in order.
    /// User and assistant messages become plain text; a tool message
    /// becomes a user message wrapping one tool-result block. Assistant
    /// `tool_calls` metadata is not re-serialized: only text is carried
    /// forward, the gateway correlates tool state through the episode. A
    /// system message fails with [`TranslateError::UnsupportedRole`]
    /// before anything is built.
    pub fn outbound(
        &self,
        history: &[Message],
        episode: &Episode,
    ) -> Result<InferenceRequest, TranslateError> {
        let mut messages = Vec::with_capacity(history.len());

        for msg in history {
            let wire = match msg.role {
                Role::User => InputMessage {
                    role: Role::User,
                    content: InputContent::Text(msg.content.clone()),
                },
                Role::Assistant => InputMessage {
                    role: Role::Assistant,
                    content: InputContent::Text(msg.content.clone()),
                },
                Role::Tool => InputMessage {
                    role: Role::User,
                    content: InputContent::Blocks(vec![InputBlock::ToolResult {
                        name: msg.tool_name.clone(),
                        result: msg.content.clone(),
                        id: msg.tool_call_id.clone(),
                    }]),
                },
                Role::System => return Err(TranslateError::UnsupportedRole(Role::System)),
            };
            messages.push(wire);
        }

        Ok(InferenceRequest {
            function_name: self.function_name.clone(),
            variant_name: self.variant_name.clone(),
            input: InferenceInput { messages },
            episode_id: episode.current().map(str::to_owned),
        })
    }

    /// Build the inbound assistant message from a gateway response.
    ///
    /// Text is the extractor's in-order concatenation; extracted tool
    /// calls are attached when present. A response with no text and no
    /// tool calls yields an empty-text message, not an error. The episode
    /// observes the response after the message is built.
    pub fn inbound(&self, response: &InferenceResponse, episode: &mut Episode) -> Message {
        let (text, calls) = extract(&response.content);
        episode.observe(response);
        Message::assistant(text).with_tool_calls(calls)
    }
}
