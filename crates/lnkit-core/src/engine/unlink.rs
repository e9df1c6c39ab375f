//! Unlink visitor: removes target links, never real files

use std::fs;
use std::path::Path;

use lnkit_fs::remove_symlink;

use crate::{Error, Result};
use crate::interaction::Interaction;
use crate::policy::Policy;
use crate::reporter::{Event, Reporter};
use crate::state::TargetState;
use crate::walker::{Visitor, WalkEntry};

use super::{Emitter, container_descends};

pub(crate) struct UnlinkVisitor<'a> {
    policy: &'a Policy,
    interaction: &'a mut dyn Interaction,
    out: Emitter<'a>,
    // Links removed below each open container, innermost last
    removed: Vec<usize>,
}

impl<'a> UnlinkVisitor<'a> {
    pub(crate) fn new(
        policy: &'a Policy,
        interaction: &'a mut dyn Interaction,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            policy,
            interaction,
            out: Emitter::new(reporter),
            removed: Vec::new(),
        }
    }

    pub(crate) fn into_report(self) -> super::RunReport {
        self.out.into_report()
    }

    fn remove(&mut self, entry: &WalkEntry, ask: bool) {
        if ask
            && !self.interaction.confirm(&format!(
                "Remove symlink {} → {}?",
                entry.target_path.display(),
                entry.source_path.display()
            ))
        {
            self.out.skipped(entry, "declined".to_string());
            return;
        }

        match remove_symlink(&entry.target_path) {
            Ok(()) => {
                self.count_removal();
                self.out.emit(Event::Unlinked {
                    target: entry.target_path.clone(),
                    source: entry.source_path.clone(),
                });
            }
            Err(e) => self.out.failed(&entry.target_path, e),
        }
    }

    fn count_removal(&mut self) {
        if let Some(count) = self.removed.last_mut() {
            *count += 1;
        }
    }

    /// Remove `dir` if it is empty. Returns whether it was removed.
    fn prune(dir: &Path) -> bool {
        let is_empty = match fs::read_dir(dir) {
            Ok(mut entries) => entries.next().is_none(),
            Err(_) => false,
        };
        if !is_empty {
            return false;
        }
        match fs::remove_dir(dir) {
            Ok(()) => {
                tracing::info!(target = %dir.display(), "removed empty directory");
                true
            }
            Err(e) => {
                tracing::warn!(target = %dir.display(), error = %e, "could not remove empty directory");
                false
            }
        }
    }
}

impl Visitor for UnlinkVisitor<'_> {
    fn visit(&mut self, entry: &WalkEntry) -> Result<bool> {
        if entry.is_container && container_descends(entry.state) {
            self.removed.push(0);
            return Ok(true);
        }

        match entry.state {
            TargetState::Ignore
            | TargetState::Missing
            | TargetState::ExistsIdentical
            | TargetState::ExistsModified => {}
            TargetState::AlreadyLinked | TargetState::MislinkedInternal => {
                self.remove(entry, self.policy.confirm)
            }
            // A link this tool did not make is always confirmed
            TargetState::MislinkedExternal => self.remove(entry, true),
        }

        Ok(false)
    }

    fn leave(&mut self, container: &WalkEntry) -> Result<()> {
        // Only directories this run emptied go; ones that were empty stay
        let removed = self.removed.pop().unwrap_or(0);
        if removed > 0 && Self::prune(&container.target_path) {
            self.count_removal();
        }
        Ok(())
    }

    fn unreadable(&mut self, target_path: &Path, error: &Error) {
        self.out.failed(target_path, error);
    }
}
