//! CLI argument definitions using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Keep a target directory in sync with a tree of dotfiles
#[derive(Parser, Debug)]
#[command(name = "lnkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(
        short,
        long,
        global = true,
        env = "LNKIT_CONFIG",
        default_value = "lnkit.toml"
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create symlinks in the target for every source entry
    Link(ApplyArgs),

    /// Remove target symlinks that point into the source
    Unlink(ApplyArgs),

    /// Show how many entries are linked, unlinked and ignored
    Stats {
        #[command(flatten)]
        tree: TreeArgs,

        /// Print counters as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Which trees to reconcile and how to walk them
#[derive(Args, Debug, Clone, Default)]
pub struct TreeArgs {
    /// Source directory (overrides `source_dir` from the config)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Target directory (overrides `target_dir` from the config)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Descend into source directories
    #[arg(long)]
    pub rec: bool,

    /// Link directories as a whole instead of descending (needs --rec)
    #[arg(long)]
    pub fold: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Replace modified files and foreign symlinks without asking
    #[arg(long)]
    pub force: bool,

    /// Do not ask before removing symlinks
    #[arg(long)]
    pub no_confirm: bool,
}
