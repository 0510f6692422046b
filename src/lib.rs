//! toolbelt - small interactive terminal utilities
//!
//! # Tools
//!
//! - **calculator**: two-operand arithmetic
//! - **converter**: distance, temperature and weight conversions
//! - **password**: strength scoring with improvement tips
//! - **todo**: task list persisted to a text file
//! - **arcade**: dice roller and number guessing game
//! - **email**: `{placeholder}` template filling
//!
//! Every tool talks to the user through [`console::Console`], so the same
//! menu loops run in a terminal or against scripted input in tests.

pub mod errors;
pub mod cli;
pub mod logging;
pub mod console;

pub mod calculator;
pub mod converter;
pub mod password;
pub mod todo;
pub mod arcade;
pub mod email;

pub mod launcher;

// Re-export commonly used types
pub use errors::{Result, ToolError};
pub use launcher::{Launcher, Tool};
