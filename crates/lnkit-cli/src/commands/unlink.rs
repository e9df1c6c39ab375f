//! The unlink command

use colored::Colorize;
use lnkit_core::{Config, Interaction, RunReport};

use crate::cli::ApplyArgs;
use crate::context::{Overrides, engine_for};
use crate::error::Result;
use crate::output::{ConsoleReporter, summary_line};

/// Remove target symlinks that point into the source directory.
pub fn run_unlink(
    config: &Config,
    args: &ApplyArgs,
    interaction: &mut dyn Interaction,
) -> Result<RunReport> {
    let engine = engine_for(config, &args.tree, Overrides::from(args))?;

    println!(
        "{} Unlinking {} from {}",
        "=>".blue().bold(),
        engine.roots().source().display().to_string().cyan(),
        engine.roots().target().display().to_string().cyan()
    );

    let report = engine.unlink(interaction, &mut ConsoleReporter)?;
    println!("{}", summary_line(&report));
    Ok(report)
}
