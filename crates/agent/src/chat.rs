//! Chat session: one conversation's message history.

use ocore::Message;

/// A conversation's ordered message history.
///
/// Owned by one logical conversation together with its episode state;
/// hosts serving many conversations give each its own `Chat`.
#[derive(Debug, Clone, Default)]
pub struct Chat {
    /// Conversation messages, in order.
    pub messages: Vec<Message>,
}

impl Chat {
    /// Create an empty chat session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages in this session.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether this session has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get the last message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
