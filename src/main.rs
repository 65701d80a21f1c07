//! ircflow - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};
use commands::select::CopyMode;

/// Environment variable holding the log filter (e.g. `IRCFLOW_LOG=debug`).
const LOG_ENV: &str = "IRCFLOW_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Strip { file } => commands::strip::handle(&file),
        Commands::Wrap { layout, json } => {
            let config = commands::load_config(config_path)?;
            commands::wrap::handle(&config, &layout, json)
        }
        Commands::Hit { layout, x, y } => {
            let config = commands::load_config(config_path)?;
            commands::hit::handle(&config, &layout, x, y)
        }
        Commands::Select {
            layout,
            from,
            to,
            copy,
            no_copy,
        } => {
            let config = commands::load_config(config_path)?;
            let mode = CopyMode::from_flags(copy, no_copy);
            commands::select::handle(&config, &layout, from, to, mode)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                let config = commands::load_config(config_path)?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Path => commands::config::handle_path(config_path),
        },
    }
}
