//! Translation errors.

use crate::Role;
use thiserror::Error;

/// Errors raised when translating conversation history for the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The gateway wire format has no mapping for this role.
    #[error("unsupported message role: {0:?}")]
    UnsupportedRole(Role),
}
