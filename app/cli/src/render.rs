//! Console rendering for conversation turns.

use console::style;
use ocore::{Message, Role};

/// Print every message of a completed turn except the user message the
/// caller already echoed.
pub fn print_turn(turn: &[Message]) {
    for message in turn.iter().skip(1) {
        print_message(message);
    }
}

/// Print one message with a styled role header.
pub fn print_message(message: &Message) {
    match message.role {
        Role::User => {
            println!("{}", style("you").green().bold());
            println!("{}\n", message.content);
        }
        Role::Assistant => {
            println!("{}", style("assistant").blue().bold());
            if !message.content.is_empty() {
                println!("{}", message.content);
            }
            for call in &message.tool_calls {
                println!(
                    "{} {}({})",
                    style("tool call:").cyan(),
                    call.name,
                    serde_args(&call.arguments)
                );
            }
            println!();
        }
        Role::Tool => {
            println!(
                "{} {}",
                style("tool result:").yellow().dim(),
                style(&message.content).dim()
            );
            println!();
        }
        Role::System => {
            println!("{}", style(&message.content).dim());
        }
    }
}

/// Print an error without aborting the session.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", style("error:").red().bold());
}

fn serde_args(arguments: &serde_json::Map<String, serde_json::Value>) -> String {
    serde_json::to_string(arguments).unwrap_or_else(|_| "{}".to_owned())
}
