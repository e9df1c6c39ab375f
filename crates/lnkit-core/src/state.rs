//! Per-entry target state classification
//!
//! The state of an entry is computed fresh from the filesystem every time;
//! nothing is cached between entries or runs.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use lnkit_fs::{EntryKind, contents_equal, entry_kind, is_descendant, read_link_absolute};

use crate::ignore::IgnoreMatcher;
use crate::policy::Roots;
use crate::Result;

/// Relationship between a source entry and whatever occupies its target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetState {
    /// The entry name matches an ignore pattern
    Ignore,
    /// The target is a symlink to this source entry
    AlreadyLinked,
    /// Nothing exists at the target path
    Missing,
    /// The target is a symlink into the source tree, but not to this entry
    MislinkedInternal,
    /// The target is a symlink pointing outside the source tree
    MislinkedExternal,
    /// The target is a real file or directory with the same contents
    ExistsIdentical,
    /// The target is a real file or directory with different contents
    ExistsModified,
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TargetState::Ignore => "ignored",
            TargetState::AlreadyLinked => "already linked",
            TargetState::Missing => "missing",
            TargetState::MislinkedInternal => "linked to another source entry",
            TargetState::MislinkedExternal => "linked outside the source",
            TargetState::ExistsIdentical => "exists with identical contents",
            TargetState::ExistsModified => "exists with different contents",
        };
        f.write_str(text)
    }
}

/// How much work the classifier does for a real entry at the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compare {
    /// Compare whole-content digests
    Contents,
    /// Only compare kinds: a directory is identical to a directory
    Kind,
}

/// Classify the entry at `relative` under `roots`.
///
/// # Errors
///
/// Fails only when the target path cannot be inspected or a symlink at the
/// target cannot be read. Content digest failures are downgraded to
/// [`TargetState::ExistsModified`].
pub fn classify(
    roots: &Roots,
    matcher: &IgnoreMatcher,
    relative: &Path,
    compare: Compare,
) -> Result<TargetState> {
    let source = roots.source_path(relative);
    let target = roots.target_path(relative);

    if let Some(name) = relative.file_name()
        && matcher.is_ignored(name)
    {
        tracing::debug!(source = %source.display(), "ignoring source");
        return Ok(TargetState::Ignore);
    }

    let state = match entry_kind(&target)? {
        EntryKind::Missing => TargetState::Missing,
        EntryKind::Symlink => {
            // Compared lexically: a chain of links through another path is not ours
            let destination = read_link_absolute(&target)?;
            if destination == source {
                TargetState::AlreadyLinked
            } else if is_descendant(&destination, roots.source()) {
                TargetState::MislinkedInternal
            } else {
                TargetState::MislinkedExternal
            }
        }
        kind @ (EntryKind::File | EntryKind::Dir) => match compare {
            Compare::Kind if kind == EntryKind::Dir => TargetState::ExistsIdentical,
            Compare::Kind => TargetState::ExistsModified,
            Compare::Contents => match contents_equal(&source, &target) {
                Ok(true) => TargetState::ExistsIdentical,
                Ok(false) => TargetState::ExistsModified,
                Err(e) => {
                    tracing::warn!(
                        target = %target.display(),
                        error = %e,
                        "could not compare contents, treating target as modified"
                    );
                    TargetState::ExistsModified
                }
            },
        },
    };

    tracing::debug!(target = %target.display(), %state, "classified");
    Ok(state)
}
