//! Interactive chat loop.

use crate::{demo, render};
use agent::{Chat, Runtime};
use anyhow::Result;
use gateway::Inference;
use ocore::Message;
use rustyline::error::ReadlineError;

/// Interactive chat REPL over the agent runtime.
pub struct ChatRepl<I: Inference> {
    runtime: Runtime<I>,
    chat: Chat,
    editor: rustyline::DefaultEditor,
}

impl<I: Inference> ChatRepl<I> {
    /// Create a new REPL with the given runtime.
    pub fn new(runtime: Runtime<I>) -> Result<Self> {
        Ok(Self {
            runtime,
            chat: Chat::new(),
            editor: rustyline::DefaultEditor::new()?,
        })
    }

    /// Run the interactive loop.
    ///
    /// `quit` exits, `demo` replays the scripted sequence into the same
    /// history, Ctrl+C/Ctrl+D exit cleanly.
    pub async fn run(&mut self) -> Result<()> {
        println!("orca chat ('quit' to exit, 'demo' for the scripted conversation)");
        println!("---");

        loop {
            match self.editor.readline("you: ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(&line);

                    match line.as_str() {
                        "quit" => break,
                        "demo" => {
                            demo::run(&mut self.runtime, &mut self.chat).await?;
                        }
                        _ => match self.runtime.send(&mut self.chat, Message::user(line)).await {
                            Ok(turn) => render::print_turn(&turn),
                            Err(e) => render::print_error(&e),
                        },
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        println!("goodbye");
        Ok(())
    }
}
