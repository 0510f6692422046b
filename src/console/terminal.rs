//! Interactive terminal console

use std::path::PathBuf;

use super::{Console, InputHandler};
use crate::errors::Result;

/// Console backed by rustyline for input and stdout for output
pub struct TerminalConsole {
    input: InputHandler,
}

impl TerminalConsole {
    pub fn new() -> Result<Self> {
        Ok(TerminalConsole {
            input: InputHandler::new()?,
        })
    }

    /// Console whose answers are remembered across runs in `history_file`
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        Ok(TerminalConsole {
            input: InputHandler::with_history(history_file)?,
        })
    }

    /// Persist history; called on graceful shutdown
    pub fn save(&mut self) -> Result<()> {
        self.input.save_history()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.input.read_line(prompt, true)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        self.input.read_line(prompt, false)
    }

    fn say(&mut self, text: &str) {
        println!("{}", text);
    }
}
