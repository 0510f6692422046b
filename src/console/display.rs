//! Styled output helpers for menus
//!
//! Every tool draws the same furniture: banners, horizontal rules, numbered
//! menus and ✓/❌/⚠ status lines. Colours come from `colored`, which honours
//! `NO_COLOR` and the global override set by `--no-color`.

use colored::*;

use super::Console;

/// Width of banners and rules
pub const RULE_WIDTH: usize = 50;

/// A horizontal rule of `ch` repeated `width` times
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Styled output on top of any [`Console`]
pub trait Screen: Console {
    fn blank(&mut self) {
        self.say("");
    }

    /// `=====` / title / `=====` block preceded by an empty line
    fn banner(&mut self, title: &str) {
        let line = rule('=', RULE_WIDTH);
        self.say(&format!("\n{}", line.cyan()));
        self.say(&format!("{}", title.bold().cyan()));
        self.say(&format!("{}", line.cyan()));
    }

    /// `--- Title ---` subsection header
    fn section(&mut self, title: &str) {
        self.say(&format!("\n{}", format!("--- {} ---", title).bold()));
    }

    fn rule(&mut self) {
        self.say(&format!("{}", rule('=', RULE_WIDTH).cyan()));
    }

    fn thin_rule(&mut self) {
        self.say(&rule('-', RULE_WIDTH));
    }

    /// Banner followed by numbered options and a closing rule
    fn menu(&mut self, title: &str, options: &[&str]) {
        self.banner(title);
        for (i, option) in options.iter().enumerate() {
            self.numbered(i + 1, option);
        }
        self.rule();
    }

    fn numbered(&mut self, index: usize, text: &str) {
        self.say(&format!("  {}. {}", index.to_string().cyan(), text));
    }

    fn bullet(&mut self, text: &str) {
        self.say(&format!("  {} {}", "•".cyan(), text));
    }

    fn success(&mut self, message: &str) {
        self.say(&format!("{} {}", "✓".green(), message));
    }

    fn error(&mut self, message: &str) {
        self.say(&format!("{} {}", "❌".red(), message.red()));
    }

    fn warning(&mut self, message: &str) {
        self.say(&format!("{} {}", "⚠".yellow(), message.yellow()));
    }

    fn info(&mut self, message: &str) {
        self.say(&format!("{}", message.cyan()));
    }
}

impl<C: Console + ?Sized> Screen for C {}
