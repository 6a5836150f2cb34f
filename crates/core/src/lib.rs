//! Core types for the orca agent runtime.
//!
//! The generic, role-based conversation model shared by the gateway
//! adapter and the agent loop: [`Message`], [`Role`], and [`ToolCall`].
//! Everything here is transport-agnostic; the wire format lives in
//! `orca-gateway`.

pub use {
    error::TranslateError,
    message::{Message, Role},
    tool::ToolCall,
};

mod error;
mod message;
mod tool;
