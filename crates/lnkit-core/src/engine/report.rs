//! Aggregated result of a link or unlink run

use serde::Serialize;
use std::path::PathBuf;

use crate::reporter::Event;

/// An entry that was left untouched, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// An entry whose action failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedEntry {
    pub path: PathBuf,
    pub message: String,
}

/// Report from a link or unlink operation
///
/// Paths are target paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Links created where nothing existed
    pub linked: Vec<PathBuf>,
    /// Existing entries replaced by a link
    pub replaced: Vec<PathBuf>,
    /// Links removed
    pub unlinked: Vec<PathBuf>,
    /// Entries left alone, for example after a declined prompt
    pub skipped: Vec<SkippedEntry>,
    /// Entries whose create or remove failed
    pub failed: Vec<FailedEntry>,
}

impl RunReport {
    /// Returns true if no entry failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Returns true if the run changed the filesystem
    pub fn has_changes(&self) -> bool {
        !(self.linked.is_empty() && self.replaced.is_empty() && self.unlinked.is_empty())
    }

    pub fn record(&mut self, event: &Event) {
        match event {
            Event::Linked { target, .. } => self.linked.push(target.clone()),
            Event::Replaced { target, .. } => self.replaced.push(target.clone()),
            Event::Unlinked { target, .. } => self.unlinked.push(target.clone()),
            Event::Skipped { target, reason } => self.skipped.push(SkippedEntry {
                path: target.clone(),
                reason: reason.clone(),
            }),
            Event::Failed { target, message } => self.failed.push(FailedEntry {
                path: target.clone(),
                message: message.clone(),
            }),
        }
    }
}
