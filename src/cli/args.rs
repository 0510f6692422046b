//! Command-line argument parsing for toolbelt
//!
//! Provides clap-based CLI with one subcommand per tool and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolbelt - small interactive terminal utilities
#[derive(Parser, Debug)]
#[command(name = "toolbelt")]
#[command(version)]
#[command(about = "Calculator, unit converter, password checker, to-do list, arcade and email templates", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Basic arithmetic calculator (interactive, or one-shot with A OP B)
    Calc {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: Option<f64>,
        /// Operation: + - * /
        op: Option<String>,
        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: Option<f64>,
    },

    /// Unit converter (interactive, or one-shot with CONVERSION VALUE)
    Convert {
        /// Conversion name, e.g. km-to-miles or c-to-f
        conversion: Option<String>,
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: Option<f64>,
    },

    /// Password strength checker
    Password,

    /// Text-file-backed to-do list
    Todo {
        /// Task file (overrides todo.file from the config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Dice roller and number guessing game
    Arcade,

    /// Email template filler
    Email {
        /// Template directory (overrides email.templates_dir)
        #[arg(long)]
        templates_dir: Option<PathBuf>,
        /// Output directory (overrides email.output_dir)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Check that one-shot arguments are either all present or all absent
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Some(Commands::Calc { a, op, b }) => {
                let given = [a.is_some(), op.is_some(), b.is_some()];
                if given.iter().any(|g| *g) && !given.iter().all(|g| *g) {
                    return Err("calc needs all of A OP B, or none for interactive mode".to_string());
                }
            }
            Some(Commands::Convert { conversion, value }) => {
                if conversion.is_some() != value.is_some() {
                    return Err("convert needs both CONVERSION and VALUE, or neither".to_string());
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing filter for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }
}
