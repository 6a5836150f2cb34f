//! The orca agent loop.
//!
//! The [`Runtime`] owns the translator, the episode state, the transport
//! and the registered tool handlers, and drives one conversation turn at a
//! time: translate outbound, infer, translate inbound, then dispatch any
//! requested tool calls and repeat until the model answers with plain
//! text.

pub use {chat::Chat, mapping::{alias_for, remote_name}};

use anyhow::Result;
use compact_str::CompactString;
use gateway::{Episode, GatewayConfig, Inference, Translator};
use ocore::{Message, ToolCall};
use serde_json::{Map, Value};
use std::{collections::BTreeMap, sync::Arc};

mod chat;
mod mapping;
pub mod tools;

/// Upper bound on tool-call rounds within a single turn.
const MAX_TOOL_CALLS: usize = 16;

/// A type-erased tool handler. Tools are synchronous: they receive the
/// resolved argument map and return their result as text.
pub type Handler = Arc<dyn Fn(&Map<String, Value>) -> String + Send + Sync>;

/// The agent runtime for one conversation.
///
/// Generic over the [`Inference`] transport so the loop can be exercised
/// against scripted responses in tests.
pub struct Runtime<I: Inference> {
    transport: I,
    translator: Translator,
    episode: Episode,
    tools: BTreeMap<CompactString, (String, Handler)>,
}

impl<I: Inference> Runtime<I> {
    /// Create a runtime over the given transport and gateway config.
    pub fn new(transport: I, config: &GatewayConfig) -> Self {
        Self {
            transport,
            translator: Translator::new(&config.function_name, &config.variant_name),
            episode: Episode::new(),
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool with its handler.
    pub fn register<F>(&mut self, name: impl Into<CompactString>, description: impl Into<String>, handler: F)
    where
        F: Fn(&Map<String, Value>) -> String + Send + Sync + 'static,
    {
        self.tools
            .insert(name.into(), (description.into(), Arc::new(handler)));
    }

    /// Register the built-in tools: calculator, current_time, text_analyzer.
    pub fn with_builtin_tools(mut self) -> Self {
        self.register(
            "calculator",
            "Evaluate arithmetic expressions with common math functions",
            tools::calculator,
        );
        self.register(
            "current_time",
            "Get the current time in a named timezone",
            tools::current_time,
        );
        self.register(
            "text_analyzer",
            "Analyze text for word counts and keyword sentiment",
            tools::text_analyzer,
        );
        self
    }

    /// Registered tool names with their descriptions, sorted by name.
    pub fn tool_descriptions(&self) -> Vec<(&str, &str)> {
        self.tools
            .iter()
            .map(|(name, (desc, _))| (name.as_str(), desc.as_str()))
            .collect()
    }

    /// The episode state for this conversation.
    pub fn episode(&self) -> &Episode {
        &self.episode
    }

    /// Send a message through the conversation and run the turn to
    /// completion.
    ///
    /// Appends the user message to history, then loops: build the outbound
    /// request, call the gateway, append the inbound assistant message, and
    /// while the model requests tool calls, dispatch them and re-issue.
    /// Returns the messages appended this turn, in order. A transport error
    /// surfaces unchanged; the episode is only updated on completed calls,
    /// so the caller may retry the same turn.
    pub async fn send(&mut self, chat: &mut Chat, message: Message) -> Result<Vec<Message>> {
        let start = chat.messages.len();
        chat.messages.push(message);

        for _ in 0..MAX_TOOL_CALLS {
            let request = self.translator.outbound(&chat.messages, &self.episode)?;
            let response = self.transport.infer(&request).await?;
            let reply = self.translator.inbound(&response, &mut self.episode);

            let calls = reply.tool_calls.clone();
            chat.messages.push(reply);
            if calls.is_empty() {
                return Ok(chat.messages[start..].to_vec());
            }

            let results = self.dispatch(&calls);
            chat.messages.extend(results);
        }

        anyhow::bail!("max tool calls reached");
    }

    /// Dispatch tool calls and collect results as tool messages.
    fn dispatch(&self, calls: &[ToolCall]) -> Vec<Message> {
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            let output = match self.tools.get(&call.name) {
                Some((_, handler)) => handler(&call.arguments),
                None => format!("function {} not available", call.name),
            };
            tracing::debug!(tool = %call.name, id = %call.id, "dispatched tool call");
            results.push(Message::tool(output, call.id.clone(), call.name.clone()));
        }
        results
    }
}
