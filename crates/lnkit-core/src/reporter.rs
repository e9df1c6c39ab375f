//! Per-entry outcome reporting

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// The outcome of handling one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A new link was created at `target`
    Linked { target: PathBuf, source: PathBuf },
    /// An existing entry at `target` was removed and replaced by a link
    Replaced { target: PathBuf, source: PathBuf },
    /// The link at `target` was removed
    Unlinked { target: PathBuf, source: PathBuf },
    /// `target` was left untouched
    Skipped { target: PathBuf, reason: String },
    /// Handling `target` failed; the walk continued
    Failed { target: PathBuf, message: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Linked { target, source } => {
                write!(f, "Linked {} → {}", target.display(), source.display())
            }
            Event::Replaced { target, source } => {
                write!(f, "Replaced {} → {}", target.display(), source.display())
            }
            Event::Unlinked { target, source } => {
                write!(f, "Removed symlink {} → {}", target.display(), source.display())
            }
            Event::Skipped { target, reason } => {
                write!(f, "Skipped {} ({})", target.display(), reason)
            }
            Event::Failed { target, message } => {
                write!(f, "Failed {}: {}", target.display(), message)
            }
        }
    }
}

/// Receives user-facing outcomes as the engine produces them.
pub trait Reporter {
    fn report(&mut self, event: &Event);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, event: &Event) {
        match event {
            Event::Failed { .. } => tracing::warn!("{}", event),
            _ => tracing::info!("{}", event),
        }
    }
}
