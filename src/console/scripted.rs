//! Scripted console for tests and non-interactive runs
//!
//! Replays a fixed queue of answers and records everything the tool prints,
//! with ANSI colour codes stripped so assertions can match plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::VecDeque;

use super::Console;
use crate::errors::{Result, ToolError};

static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI escape pattern is valid")
});

/// Console that answers prompts from a queue
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    lines: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `inputs`, in order
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Printed lines, colour codes removed
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Prompts shown so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Everything printed, joined with newlines
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.output().contains(needle)
    }

    /// Number of times `needle` occurs in the output
    pub fn count(&self, needle: &str) -> usize {
        self.output().matches(needle).count()
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(ToolError::EndOfInput)
    }

    fn say(&mut self, text: &str) {
        self.lines.push(ANSI_ESCAPE.replace_all(text, "").into_owned());
    }
}
