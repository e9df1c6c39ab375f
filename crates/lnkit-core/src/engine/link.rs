//! Link visitor: creates and repairs target links

use std::path::Path;

use lnkit_fs::{create_symlink, remove_path};

use crate::{Error, Result};
use crate::interaction::Interaction;
use crate::policy::Policy;
use crate::reporter::{Event, Reporter};
use crate::state::TargetState;
use crate::walker::{Visitor, WalkEntry};

use super::{Emitter, container_descends};

pub(crate) struct LinkVisitor<'a> {
    policy: &'a Policy,
    interaction: &'a mut dyn Interaction,
    out: Emitter<'a>,
}

impl<'a> LinkVisitor<'a> {
    pub(crate) fn new(
        policy: &'a Policy,
        interaction: &'a mut dyn Interaction,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            policy,
            interaction,
            out: Emitter::new(reporter),
        }
    }

    pub(crate) fn into_report(self) -> super::RunReport {
        self.out.into_report()
    }

    fn create(&mut self, entry: &WalkEntry) {
        match create_symlink(&entry.source_path, &entry.target_path, self.policy.create_dirs) {
            Ok(()) => self.out.emit(Event::Linked {
                target: entry.target_path.clone(),
                source: entry.source_path.clone(),
            }),
            Err(e) => self.out.failed(&entry.target_path, e),
        }
    }

    fn replace(&mut self, entry: &WalkEntry) {
        tracing::debug!(target = %entry.target_path.display(), state = %entry.state, "replacing target");
        if let Err(e) = remove_path(&entry.target_path) {
            self.out.failed(&entry.target_path, e);
            return;
        }
        match create_symlink(&entry.source_path, &entry.target_path, self.policy.create_dirs) {
            Ok(()) => self.out.emit(Event::Replaced {
                target: entry.target_path.clone(),
                source: entry.source_path.clone(),
            }),
            Err(e) => self.out.failed(&entry.target_path, e),
        }
    }

    /// Offer a diff preview, then ask whether the existing entry may go.
    fn approve_removal(&mut self, entry: &WalkEntry) -> bool {
        let target = entry.target_path.display();
        if self
            .interaction
            .confirm(&format!("Preview diff of existing file at {target}?"))
        {
            self.interaction
                .preview_diff(&entry.source_path, &entry.target_path);
        }
        self.interaction
            .confirm(&format!("Delete existing file at {target}?"))
    }
}

impl Visitor for LinkVisitor<'_> {
    fn visit(&mut self, entry: &WalkEntry) -> Result<bool> {
        if entry.is_container {
            if container_descends(entry.state) {
                return Ok(true);
            }
            let reason = match entry.state {
                TargetState::ExistsModified => "target exists and is not a directory".to_string(),
                state => format!("directory target is {state}"),
            };
            self.out.skipped(entry, reason);
            return Ok(false);
        }

        match entry.state {
            TargetState::Ignore | TargetState::AlreadyLinked => {}
            TargetState::Missing => self.create(entry),
            TargetState::MislinkedInternal | TargetState::ExistsIdentical => self.replace(entry),
            TargetState::MislinkedExternal | TargetState::ExistsModified => {
                if self.policy.force {
                    tracing::info!(target = %entry.target_path.display(), "overwriting existing entry");
                    self.replace(entry);
                } else if self.approve_removal(entry) {
                    self.replace(entry);
                } else {
                    self.out.skipped(entry, "declined".to_string());
                }
            }
        }

        Ok(false)
    }

    fn unreadable(&mut self, target_path: &Path, error: &Error) {
        self.out.failed(target_path, error);
    }
}
