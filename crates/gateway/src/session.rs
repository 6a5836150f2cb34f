//! Episode state: the gateway's session continuity token.

use crate::wire::InferenceResponse;

/// The continuity token for one logical conversation.
///
/// Owned exclusively by the conversation that created it; concurrent
/// conversations each get their own `Episode`, so no locking is needed.
/// Created empty, read before each outbound call, updated only through
/// [`observe`](Episode::observe) after a completed call.
#[derive(Debug, Clone, Default)]
pub struct Episode {
    id: Option<String>,
}

impl Episode {
    /// Create an empty episode for a fresh conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current token, if the gateway has issued one.
    pub fn current(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Update the token from a completed response.
    ///
    /// Overwrites the token when the response carries one. A response
    /// without a token leaves the current value in place; the token is
    /// never cleared for the lifetime of the conversation.
    pub fn observe(&mut self, response: &InferenceResponse) {
        if let Some(id) = &response.episode_id {
            self.id = Some(id.clone());
        }
    }
}
