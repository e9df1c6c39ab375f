//! Depth-first traversal of the source tree

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::ignore::IgnoreMatcher;
use crate::policy::Roots;
use crate::state::{Compare, TargetState, classify};
use crate::{Error, Result};

/// One classified source entry handed to a [`Visitor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path relative to both roots
    pub relative_path: PathBuf,
    /// Absolute path in the source tree
    pub source_path: PathBuf,
    /// Absolute path the entry maps to in the target tree
    pub target_path: PathBuf,
    pub is_dir: bool,
    /// A directory the walk descends into rather than treating as a unit
    pub is_container: bool,
    pub state: TargetState,
}

/// Receives every visited entry in traversal order.
pub trait Visitor {
    /// Handle `entry` and return whether to descend into it.
    ///
    /// The answer only matters for containers; everything else is never
    /// descended.
    fn visit(&mut self, entry: &WalkEntry) -> Result<bool>;

    /// Called once every entry below a descended container has been visited.
    fn leave(&mut self, _container: &WalkEntry) -> Result<()> {
        Ok(())
    }

    /// Called instead of [`visit`](Visitor::visit) when the target of an
    /// entry cannot be inspected. The entry is not descended.
    fn unreadable(&mut self, target_path: &Path, error: &Error);
}

/// Walk the source tree under `roots` in file-name order.
///
/// The source root itself and source-side symlinks are skipped. When
/// `descend_dirs` is false only the top level is visited and directories
/// are handed to the visitor as single entries. Ignored entries are never
/// descended, whatever the visitor answers.
///
/// # Errors
///
/// Aborts on the first source directory that cannot be read, or the first
/// visitor error. A target that cannot be inspected only affects its own
/// entry.
pub fn walk(
    roots: &Roots,
    matcher: &IgnoreMatcher,
    descend_dirs: bool,
    visitor: &mut dyn Visitor,
) -> Result<()> {
    let mut entries = WalkDir::new(roots.source())
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    // Descended containers still waiting for `leave`, with their depth
    let mut open: Vec<(usize, WalkEntry)> = Vec::new();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|e| walk_error(roots.source(), e))?;
        leave_finished(&mut open, entry.depth(), visitor)?;
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            tracing::debug!(path = %entry.path().display(), "skipping source symlink");
            continue;
        }

        let relative_path = relative_to(entry.path(), roots.source())?;
        let target_path = roots.target_path(&relative_path);
        let is_dir = file_type.is_dir();
        let compare = if is_dir && descend_dirs {
            Compare::Kind
        } else {
            Compare::Contents
        };

        let state = match classify(roots, matcher, &relative_path, compare) {
            Ok(state) => state,
            Err(e) => {
                visitor.unreadable(&target_path, &e);
                if is_dir {
                    entries.skip_current_dir();
                }
                continue;
            }
        };

        let walk_entry = WalkEntry {
            source_path: entry.path().to_path_buf(),
            target_path,
            relative_path,
            is_dir,
            is_container: is_dir && descend_dirs && state != TargetState::Ignore,
            state,
        };

        let descend = visitor.visit(&walk_entry)?;
        if descend && walk_entry.is_container {
            open.push((entry.depth(), walk_entry));
        } else if is_dir {
            entries.skip_current_dir();
        }
    }

    leave_finished(&mut open, 0, visitor)
}

/// Leave every open container at `depth` or deeper, innermost first.
fn leave_finished(
    open: &mut Vec<(usize, WalkEntry)>,
    depth: usize,
    visitor: &mut dyn Visitor,
) -> Result<()> {
    while open.last().is_some_and(|(open_depth, _)| *open_depth >= depth) {
        if let Some((_, container)) = open.pop() {
            visitor.leave(&container)?;
        }
    }
    Ok(())
}

fn relative_to(path: &Path, root: &Path) -> Result<PathBuf> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| Error::Walk {
            path: path.to_path_buf(),
            message: format!("entry is outside of {}", root.display()),
        })
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    Error::Walk {
        path: err.path().unwrap_or(root).to_path_buf(),
        message: err.to_string(),
    }
}
