//! Error types for toolbelt
//!
//! Every tool reports recoverable problems (bad numbers, missing files) to the
//! user and keeps going; these variants carry enough detail to print a useful
//! message at the call site.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type shared by all tools
#[derive(Error, Debug)]
pub enum ToolError {
    /// Input that should have been a number
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    /// Selection outside of the allowed range
    #[error("{value} is out of range (expected {min}-{max})")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Calculator division with a zero divisor
    #[error("Cannot divide by 0")]
    DivisionByZero,

    /// Calculator operator that is not one of + - * /
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Unit conversion name that is not recognised
    #[error("Unknown conversion: {0}")]
    UnknownConversion(String),

    /// Email template file that could not be found
    #[error("Template file '{}' not found", .0.display())]
    TemplateNotFound(PathBuf),

    /// Task operation on an empty to-do list
    #[error("No tasks in the list")]
    EmptyList,

    /// Task that already carries the completion marker
    #[error("Task is already marked as complete")]
    AlreadyComplete,

    /// Line editor failures
    #[error("Readline error: {0}")]
    Readline(String),

    /// Ctrl-C at a prompt
    #[error("Interrupted")]
    Interrupted,

    /// Ctrl-D or exhausted scripted input
    #[error("End of input")]
    EndOfInput,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

impl From<rustyline::error::ReadlineError> for ToolError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        use rustyline::error::ReadlineError;
        match err {
            ReadlineError::Interrupted => ToolError::Interrupted,
            ReadlineError::Eof => ToolError::EndOfInput,
            ReadlineError::Io(io) => ToolError::Io(io),
            other => ToolError::Readline(other.to_string()),
        }
    }
}
