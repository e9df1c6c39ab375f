//! lnkit CLI
//!
//! Links a tree of dotfiles into a target directory, removes those links
//! again, and reports how far the two have drifted apart.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;
use lnkit_core::{Config, ConfigSource};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("{} dotfile symlink manager", "lnkit".green().bold());
        println!();
        println!("Run {} for available commands.", "lnkit --help".cyan());
        return Ok(());
    };

    let loaded = Config::load_or_default(&cli.config)?;

    if let Err(e) = logging::init(cli.verbose, &loaded.config.options.log_level) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }
    match &loaded.source {
        ConfigSource::File(path) => tracing::info!("Using config at {}", path.display()),
        ConfigSource::Defaults => tracing::info!(
            "No config file found at {}. Using default config.",
            cli.config.display()
        ),
    }

    execute_command(command, &loaded.config)
}

fn execute_command(cmd: Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::Link(args) => {
            let mut interaction = interactive::for_stdin();
            commands::run_link(config, &args, interaction.as_mut())?;
        }
        Commands::Unlink(args) => {
            let mut interaction = interactive::for_stdin();
            commands::run_unlink(config, &args, interaction.as_mut())?;
        }
        Commands::Stats { tree, json } => {
            commands::run_stats(config, &tree, json)?;
        }
    }
    Ok(())
}
