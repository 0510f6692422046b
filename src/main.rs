//! toolbelt - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use toolbelt::{
    calculator,
    cli::{Args, Commands, Config},
    console::{Console, Screen, TerminalConsole},
    converter::Conversion,
    logging, Launcher, Tool, ToolError,
};

fn main() {
    match run() {
        Ok(()) => {}
        Err(err) => {
            if let Some(ToolError::Interrupted) = err.downcast_ref::<ToolError>() {
                eprintln!("\nInterrupted");
                std::process::exit(130);
            }
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    args.validate().map_err(anyhow::Error::msg)?;

    let config = load_config(&args)?;

    let color = !args.no_color && config.display.color;
    if !color {
        colored::control::set_override(false);
    }
    logging::init(args.verbosity(), color).context("Failed to initialize logging")?;
    tracing::debug!(verbosity = args.verbosity().as_str(), "starting toolbelt");

    match &args.command {
        Some(Commands::Calc {
            a: Some(a),
            op: Some(op),
            b: Some(b),
        }) => {
            let value = calculator::calculate(*a, op, *b)?;
            println!("{}", calculator::describe(&Ok(value)));
        }
        Some(Commands::Convert {
            conversion: Some(name),
            value: Some(value),
        }) => {
            let conversion: Conversion = name.parse()?;
            println!("{}", conversion.format(*value));
        }
        Some(Commands::Config) => {
            show_config(&args, &config)?;
        }
        Some(command) => {
            if let Some(tool) = tool_for(command) {
                run_interactive(&config, |launcher, console, rng| {
                    launcher.run_tool(tool, console, rng)
                })?;
            }
        }
        None => {
            run_interactive(&config, |launcher, console, rng| launcher.run(console, rng))?;
        }
    }

    Ok(())
}

/// Load the config file and apply per-command path overrides
fn load_config(args: &Args) -> Result<Config> {
    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    match &args.command {
        Some(Commands::Todo { file: Some(file) }) => {
            config.todo.file = file.display().to_string();
        }
        Some(Commands::Email {
            templates_dir,
            output_dir,
        }) => {
            if let Some(dir) = templates_dir {
                config.email.templates_dir = dir.display().to_string();
            }
            if let Some(dir) = output_dir {
                config.email.output_dir = dir.display().to_string();
            }
        }
        _ => {}
    }

    config.validate()?;
    Ok(config)
}

/// Interactive tool behind a subcommand
fn tool_for(command: &Commands) -> Option<Tool> {
    match command {
        Commands::Calc { .. } => Some(Tool::Calculator),
        Commands::Convert { .. } => Some(Tool::Converter),
        Commands::Password => Some(Tool::Password),
        Commands::Todo { .. } => Some(Tool::Todo),
        Commands::Arcade => Some(Tool::Arcade),
        Commands::Email { .. } => Some(Tool::Email),
        Commands::Config => None,
    }
}

/// Open a terminal console and run `body` with it, saving history afterwards
fn run_interactive<F>(config: &Config, body: F) -> Result<()>
where
    F: FnOnce(&Launcher, &mut dyn Console, &mut rand::rngs::ThreadRng) -> toolbelt::Result<()>,
{
    let mut console = match TerminalConsole::with_history(config.history_file()) {
        Ok(console) => console,
        Err(err) => {
            tracing::warn!(%err, "history unavailable, continuing without it");
            TerminalConsole::new().context("Failed to open terminal")?
        }
    };

    let launcher = Launcher::new(config.clone());
    let mut rng = rand::thread_rng();
    let result = {
        let console_ref: &mut dyn Console = &mut console;
        body(&launcher, console_ref, &mut rng)
    };

    if let Err(err) = console.save() {
        tracing::warn!(%err, "failed to save history");
    }

    result.map_err(anyhow::Error::from)
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    let mut out = ConsoleOut;
    out.banner("toolbelt Configuration");
    match &args.config {
        Some(path) => out.info(&format!("Config file: {}", path.display())),
        None => match Config::default_path() {
            Some(path) if path.exists() => out.info(&format!("Config file: {}", path.display())),
            Some(path) => out.info(&format!("Config file: {} (not found, using defaults)", path.display())),
            None => out.info("Config file: none (using defaults)"),
        },
    }
    out.blank();
    out.say(&config.to_toml()?);
    Ok(())
}

/// Output-only console for non-interactive commands
struct ConsoleOut;

impl Console for ConsoleOut {
    fn read_line(&mut self, _prompt: &str) -> toolbelt::Result<String> {
        Err(ToolError::EndOfInput)
    }

    fn say(&mut self, text: &str) {
        println!("{}", text);
    }
}
