//! Top-level menu that starts any of the tools
//!
//! Each tool runs with settings taken from [`Config`]. Closing the input
//! stream inside a tool ends that tool only; closing it at the launcher prompt
//! ends the program.

use rand::Rng;

use crate::arcade::{self, DiceSettings};
use crate::cli::Config;
use crate::console::{Console, Screen};
use crate::email::{self, TemplateLibrary};
use crate::errors::{Result, ToolError};
use crate::todo::{self, TaskStore};
use crate::{calculator, converter, password};

/// The tools reachable from the launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Calculator,
    Converter,
    Password,
    Todo,
    Arcade,
    Email,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Calculator,
        Tool::Converter,
        Tool::Password,
        Tool::Todo,
        Tool::Arcade,
        Tool::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Calculator => "🧮 Calculator",
            Tool::Converter => "📏 Unit Converter",
            Tool::Password => "🔐 Password Strength Checker",
            Tool::Todo => "📝 To-Do List",
            Tool::Arcade => "🎮 Game Arcade",
            Tool::Email => "📧 Email Template Filler",
        }
    }

    /// Menu choice "1".."6"
    pub fn from_choice(choice: &str) -> Option<Self> {
        let n: usize = choice.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Runs tools with the configured settings
pub struct Launcher {
    config: Config,
}

impl Launcher {
    pub fn new(config: Config) -> Self {
        Launcher { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn dice_settings(&self) -> DiceSettings {
        DiceSettings {
            max_dice: self.config.arcade.max_dice,
            roll_delay_ms: self.config.arcade.roll_delay_ms,
        }
    }

    /// Run a single tool to completion.
    ///
    /// End of input inside the tool is treated as leaving it.
    pub fn run_tool<R: Rng>(&self, tool: Tool, console: &mut dyn Console, rng: &mut R) -> Result<()> {
        tracing::info!(?tool, "starting tool");
        let result = match tool {
            Tool::Calculator => calculator::run(console),
            Tool::Converter => converter::run(console),
            Tool::Password => password::run(console, self.config.password.min_length),
            Tool::Todo => todo::run(console, TaskStore::new(self.config.todo_file())),
            Tool::Arcade => arcade::run(console, rng, self.dice_settings()),
            Tool::Email => email::run(
                console,
                TemplateLibrary::new(self.config.templates_dir(), self.config.output_dir()),
            ),
        };

        match result {
            Err(ToolError::EndOfInput) => {
                tracing::debug!(?tool, "input closed inside tool");
                Ok(())
            }
            other => other,
        }
    }

    /// Launcher menu loop
    pub fn run<R: Rng>(&self, console: &mut dyn Console, rng: &mut R) -> Result<()> {
        let mut options: Vec<&str> = Tool::ALL.iter().map(|t| t.label()).collect();
        options.push("🚪 Exit");
        let exit_choice = options.len();

        loop {
            console.menu("           🧰 TOOLBELT 🧰", &options);
            let choice = match console.read_line(&format!("\nChoose a tool (1-{}): ", exit_choice)) {
                Ok(choice) => choice,
                Err(ToolError::EndOfInput) => {
                    console.say("\n👋 Goodbye!");
                    return Ok(());
                }
                Err(err) => return Err(err),
            };

            if choice.trim() == exit_choice.to_string() {
                console.say("\n👋 Goodbye!");
                return Ok(());
            }

            match Tool::from_choice(&choice) {
                Some(tool) => self.run_tool(tool, console, rng)?,
                None => console.error(&format!("Invalid choice! Please enter 1-{}.", exit_choice)),
            }
        }
    }
}
