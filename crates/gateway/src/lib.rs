//! Adapter between the generic conversation model and the inference
//! gateway's wire protocol.
//!
//! The gateway fronts multiple model providers behind named functions and
//! variants. This crate owns the translation boundary:
//!
//! - [`wire`]: serde types matching the gateway's JSON exactly.
//! - [`extract`]: normalizes a response's heterogeneous content blocks
//!   into text plus tool calls.
//! - [`Translator`]: maps conversation history to wire messages and a
//!   wire response back to one assistant [`Message`](ocore::Message).
//! - [`Episode`]: the continuity token the gateway uses to correlate a
//!   multi-turn conversation into one logical session.
//! - [`Gateway`]: the HTTP transport collaborator behind the
//!   [`Inference`] seam.
//!
//! The crate executes no tools, owns no retry policy, and renders
//! nothing; it is a translation layer plus one piece of session state.

pub use {
    client::{Gateway, Inference},
    config::GatewayConfig,
    extract::extract,
    session::Episode,
    translate::Translator,
};

mod client;
mod config;
pub mod extract;
mod session;
mod translate;
pub mod wire;
