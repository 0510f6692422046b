//! Tracing initialization for toolbelt
//!
//! Logs go to stderr so they never interleave with menu output on stdout.
//! `RUST_LOG` wins over the verbosity-derived default:
//! - `RUST_LOG=debug` - Set global level
//! - `RUST_LOG=toolbelt::todo=debug` - Per-module levels

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Verbosity;
use crate::errors::{Result, ToolError};

/// Initialize the subscriber for the given verbosity
pub fn init(verbosity: Verbosity, color: bool) -> Result<()> {
    init_with_defaults(verbosity.log_filter(), color)
}

/// Initialize with a default filter if RUST_LOG is not set
pub fn init_with_defaults(default_filter: &str, color: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_ansi(color)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| ToolError::Config(format!("Failed to initialize tracing: {}", e)))
}
