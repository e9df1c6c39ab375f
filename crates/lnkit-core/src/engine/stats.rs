//! Read-only link statistics

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};
use crate::state::TargetState;
use crate::walker::{Visitor, WalkEntry};

/// Counters gathered by one stats walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub linked_files: usize,
    pub linked_dirs: usize,
    /// Entries without a correct link, for any reason below
    pub unlinked: usize,
    pub same_contents: usize,
    pub different_contents: usize,
    pub incorrect_symlink: usize,
    pub no_target: usize,
    pub ignored: usize,
}

impl Stats {
    /// Count one entry of `state`.
    pub fn record(&mut self, state: TargetState, is_dir: bool) {
        match state {
            TargetState::Ignore => self.ignored += 1,
            TargetState::AlreadyLinked if is_dir => self.linked_dirs += 1,
            TargetState::AlreadyLinked => self.linked_files += 1,
            TargetState::Missing => {
                self.no_target += 1;
                self.unlinked += 1;
            }
            TargetState::MislinkedInternal | TargetState::MislinkedExternal => {
                self.incorrect_symlink += 1;
                self.unlinked += 1;
            }
            TargetState::ExistsIdentical => {
                self.same_contents += 1;
                self.unlinked += 1;
            }
            TargetState::ExistsModified => {
                self.different_contents += 1;
                self.unlinked += 1;
            }
        }
    }

    /// Total correctly linked entries
    pub fn linked(&self) -> usize {
        self.linked_files + self.linked_dirs
    }
}

/// Counts entries without touching the filesystem.
#[derive(Debug, Default)]
pub(crate) struct StatsVisitor {
    pub(crate) stats: Stats,
}

impl Visitor for StatsVisitor {
    fn visit(&mut self, entry: &WalkEntry) -> Result<bool> {
        if entry.is_container && super::container_descends(entry.state) {
            return Ok(true);
        }
        self.stats.record(entry.state, entry.is_dir);
        Ok(false)
    }

    fn unreadable(&mut self, target_path: &Path, error: &Error) {
        tracing::warn!(target = %target_path.display(), error = %error, "not counted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ignored(TargetState::Ignore, false, Stats { ignored: 1, ..Stats::default() })]
    #[case::linked_file(TargetState::AlreadyLinked, false, Stats { linked_files: 1, ..Stats::default() })]
    #[case::linked_dir(TargetState::AlreadyLinked, true, Stats { linked_dirs: 1, ..Stats::default() })]
    #[case::missing(TargetState::Missing, false, Stats { no_target: 1, unlinked: 1, ..Stats::default() })]
    #[case::internal(TargetState::MislinkedInternal, false, Stats { incorrect_symlink: 1, unlinked: 1, ..Stats::default() })]
    #[case::external(TargetState::MislinkedExternal, true, Stats { incorrect_symlink: 1, unlinked: 1, ..Stats::default() })]
    #[case::identical(TargetState::ExistsIdentical, false, Stats { same_contents: 1, unlinked: 1, ..Stats::default() })]
    #[case::modified(TargetState::ExistsModified, false, Stats { different_contents: 1, unlinked: 1, ..Stats::default() })]
    fn test_record(#[case] state: TargetState, #[case] is_dir: bool, #[case] expected: Stats) {
        let mut stats = Stats::default();
        stats.record(state, is_dir);
        assert_eq!(stats, expected);
    }

    #[test]
    fn test_stats_serialize_as_flat_counters() {
        let stats = Stats { linked_files: 2, ignored: 1, ..Stats::default() };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["linked_files"], 2);
        assert_eq!(json["ignored"], 1);
        assert_eq!(json["no_target"], 0);
    }
}
