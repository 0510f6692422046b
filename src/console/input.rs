//! Input handler using rustyline
//!
//! Provides line editing and persistent history for menu answers.
//! Secrets (passwords) are read through the same editor but never recorded.

use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::errors::Result;

/// Input handler managing the readline interface and command history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InputHandler {
    /// Create new input handler without persistent history
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
        })
    }

    /// Create input handler with persistent history
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if history_file.exists() {
            if let Err(err) = editor.load_history(&history_file) {
                tracing::warn!(path = %history_file.display(), %err, "could not load history");
            }
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
        })
    }

    /// Read a line of input from user
    ///
    /// Ctrl-D maps to `ToolError::EndOfInput`, Ctrl-C to `ToolError::Interrupted`.
    pub fn read_line(&mut self, prompt: &str, remember: bool) -> Result<String> {
        let line = self.editor.readline(prompt)?;

        if remember && !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.trim());
        }

        Ok(line)
    }

    /// Save history to disk
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.editor.save_history(path)?;
        }
        Ok(())
    }
}
