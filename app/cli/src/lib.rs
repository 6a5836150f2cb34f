//! Console front end for the orca agent.
//!
//! Two modes: an interactive read-line loop (`chat`, the default) and a
//! fixed scripted sequence of demonstration prompts (`demo`). Both append
//! one user message per turn and feed the whole history through the agent
//! runtime; no translation logic lives here.

use clap::{Parser, Subcommand};

pub mod config;
pub mod demo;
pub mod render;
pub mod repl;

/// The orca command line interface.
#[derive(Debug, Parser)]
#[command(name = "orca", about = "Chat with an agent through an inference gateway")]
pub struct Cli {
    /// Path to a gateway config file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the gateway base URL.
    #[arg(long, global = true)]
    pub gateway_url: Option<String>,

    /// The command to run. Defaults to interactive chat.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive chat (default).
    Chat,
    /// Run the scripted demo conversation.
    Demo,
}
