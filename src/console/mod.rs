//! Console abstraction shared by every tool
//!
//! Tools talk to the user only through [`Console`], so the same menu loop runs
//! against a real terminal (rustyline + stdout) or a scripted session in tests.

pub mod display;
pub mod input;
pub mod scripted;
pub mod terminal;

use std::str::FromStr;

use crate::errors::{Result, ToolError};

pub use display::Screen;
pub use input::InputHandler;
pub use scripted::ScriptedConsole;
pub use terminal::TerminalConsole;

/// Line-oriented interactive I/O
pub trait Console {
    /// Read one line after showing `prompt`.
    ///
    /// Returns `ToolError::EndOfInput` when the input stream is closed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Read a line that must not be kept anywhere (history, logs)
    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }

    /// Print one line (may contain embedded newlines)
    fn say(&mut self, text: &str);
}

/// Parse trimmed input as a number
pub fn parse_number<T: FromStr>(input: &str) -> Result<T> {
    let trimmed = input.trim();
    trimmed
        .parse::<T>()
        .map_err(|_| ToolError::InvalidNumber(trimmed.to_string()))
}

/// Keep asking until the answer parses as `T`
pub fn prompt_number<T: FromStr>(
    console: &mut dyn Console,
    prompt: &str,
    invalid_message: &str,
) -> Result<T> {
    loop {
        let line = console.read_line(prompt)?;
        match parse_number(&line) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(%err, "rejected numeric input");
                console.error(invalid_message);
            }
        }
    }
}

/// Ask a yes/no question; only `yes` and `y` (any case) count as yes
pub fn confirm(console: &mut dyn Console, prompt: &str) -> Result<bool> {
    let answer = console.read_line(prompt)?;
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Wait for Enter before redrawing a menu
pub fn pause(console: &mut dyn Console, prompt: &str) -> Result<()> {
    console.read_line(prompt).map(|_| ())
}
