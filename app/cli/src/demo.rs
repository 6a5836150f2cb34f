//! The scripted demo conversation.

use crate::render;
use agent::{Chat, Runtime};
use anyhow::Result;
use console::style;
use gateway::Inference;
use ocore::Message;

/// The fixed demonstration prompts, exercising each tool in turn.
pub const DEMO_PROMPTS: &[&str] = &[
    "Hello! Can you explain what you can help me with?",
    "What's the weather like in Tokyo?",
    "Can you calculate sqrt(144) + 5?",
    "What time is it in Tokyo right now?",
    "Where can I read more about how your tools are configured?",
    "Can you analyze this text: 'This is an amazing product, I love it!'",
    "What's 2 ** 8?",
    "How's the weather in Paris?",
];

/// Run the scripted sequence against the given runtime and history.
///
/// Each prompt is appended as a user message and the whole history goes
/// through the runtime; a failed turn is reported and the script
/// continues with the next prompt.
pub async fn run<I: Inference>(runtime: &mut Runtime<I>, chat: &mut Chat) -> Result<()> {
    println!("{}\n", style("orca demo conversation").magenta().bold());

    for prompt in DEMO_PROMPTS {
        println!("{}", style("you").green().bold());
        println!("{prompt}\n");

        match runtime.send(chat, Message::user(*prompt)).await {
            Ok(turn) => render::print_turn(&turn),
            Err(e) => render::print_error(&e),
        }
    }

    Ok(())
}
