//! Turning the loaded config and command flags into an engine

use lnkit_core::config::IGNORE_FILE;
use lnkit_core::{Config, ReconciliationEngine};

use crate::cli::{ApplyArgs, TreeArgs};
use crate::error::{CliError, Result};

/// Flags that override `[options]` for a single run
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub force: bool,
    pub no_confirm: bool,
}

impl From<&ApplyArgs> for Overrides {
    fn from(args: &ApplyArgs) -> Self {
        Self {
            force: args.force,
            no_confirm: args.no_confirm,
        }
    }
}

/// Build the engine for one command.
///
/// Command-line directories replace the configured ones, `.lnkitignore` in
/// the source directory extends the ignore list, and the roots are
/// validated before anything is returned.
pub fn engine_for(
    config: &Config,
    tree: &TreeArgs,
    overrides: Overrides,
) -> Result<ReconciliationEngine> {
    let mut config = config.clone();
    if let Some(source) = &tree.source {
        config.options.source_dir = non_empty("--source", source)?;
    }
    if let Some(target) = &tree.target {
        config.options.target_dir = non_empty("--target", target)?;
    }

    let source = config.source_dir()?;
    let target = config.target_dir()?;

    let added = config.extend_ignore_from_file(&source.join(IGNORE_FILE))?;
    if added > 0 {
        tracing::debug!(count = added, "loaded patterns from {}", IGNORE_FILE);
    }

    let mut policy = config.policy(tree.rec, tree.fold);
    if overrides.force {
        policy.force = true;
    }
    if overrides.no_confirm {
        policy.confirm = false;
    }

    Ok(ReconciliationEngine::new(&source, &target, policy)?)
}

fn non_empty(flag: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(CliError::user(format!("{flag} must not be empty")));
    }
    Ok(value.to_string())
}
