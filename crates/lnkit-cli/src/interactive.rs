//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal confirmation and `git diff` for previews.

use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use std::process::Command;

use dialoguer::Confirm;
use lnkit_core::{Interaction, NonInteractive};
use similar::TextDiff;

/// Asks on the terminal. Prompt failures count as a decline.
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl Interaction for TerminalInteraction {
    fn confirm(&mut self, prompt: &str) -> bool {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "prompt failed, treating as no");
                false
            }
        }
    }

    fn preview_diff(&mut self, source: &Path, target: &Path) {
        // git exits 1 when the files differ, so only a spawn failure matters
        let spawned = Command::new("git")
            .args(["diff", "--no-index", "--color"])
            .arg(source)
            .arg(target)
            .status();

        if let Err(e) = spawned {
            tracing::debug!(error = %e, "git unavailable, using built-in diff");
            print!("{}", unified_diff(source, target));
        }
    }
}

/// Pick the interaction for this process: the terminal when stdin is one,
/// otherwise decline everything.
pub fn for_stdin() -> Box<dyn Interaction> {
    if std::io::stdin().is_terminal() {
        Box::new(TerminalInteraction)
    } else {
        tracing::debug!("stdin is not a terminal, prompts will be declined");
        Box::new(NonInteractive)
    }
}

/// Unified diff from `source` to `target`.
///
/// Entries that cannot be read as text (directories, binary files) get a
/// one-line note instead.
pub fn unified_diff(source: &Path, target: &Path) -> String {
    let (old, new) = match (fs::read_to_string(source), fs::read_to_string(target)) {
        (Ok(old), Ok(new)) => (old, new),
        _ => {
            return format!(
                "Binary files or directories {} and {} differ\n",
                source.display(),
                target.display()
            );
        }
    };

    TextDiff::from_lines(&old, &new)
        .unified_diff()
        .context_radius(3)
        .header(&source.display().to_string(), &target.display().to_string())
        .to_string()
}
