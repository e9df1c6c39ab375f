//! The stats command

use lnkit_core::{Config, Stats};

use crate::cli::TreeArgs;
use crate::context::{Overrides, engine_for};
use crate::error::Result;
use crate::output::render_stats;

/// Count source entries by the state of their targets.
pub fn run_stats(config: &Config, tree: &TreeArgs, json: bool) -> Result<Stats> {
    let engine = engine_for(config, tree, Overrides::default())?;
    let stats = engine.stats()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render_stats(&stats));
    }
    Ok(stats)
}
