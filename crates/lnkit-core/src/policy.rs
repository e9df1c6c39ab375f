//! Operation policy and validated roots

use std::fs;
use std::path::{Path, PathBuf};

use lnkit_fs::is_descendant;

use crate::error::{RootProblem, RootRole};
use crate::{Error, Result};

/// How an operation treats conflicts and directories.
///
/// Fixed for the duration of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Ask before removing symlinks during unlink
    pub confirm: bool,
    /// Replace modified files and foreign links without asking
    pub force: bool,
    /// Create missing parent directories of a new link
    pub create_dirs: bool,
    /// Visit entries below the top level of the source tree
    pub recursive: bool,
    /// Link directories as single units instead of descending into them
    pub fold: bool,
    /// Glob patterns matched against entry base names
    pub ignore: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            confirm: true,
            force: false,
            create_dirs: true,
            recursive: false,
            fold: false,
            ignore: Vec::new(),
        }
    }
}

impl Policy {
    /// Returns true if directories are descended into rather than handled
    /// as single units.
    pub fn descends_into_dirs(&self) -> bool {
        self.recursive && !self.fold
    }
}

/// A validated pair of source and target roots.
///
/// Both are absolute, existing, canonical directories that are not symlinks,
/// are not equal, and the target does not lie inside the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    source: PathBuf,
    target: PathBuf,
}

impl Roots {
    pub fn new(source: &Path, target: &Path) -> Result<Self> {
        let source = validate_root(RootRole::Source, source)?;
        let target = validate_root(RootRole::Target, target)?;

        if source == target {
            return Err(Error::RootsEqual { path: source });
        }
        if is_descendant(&target, &source) {
            return Err(Error::TargetInsideSource {
                source_root: source,
                target_root: target,
            });
        }

        Ok(Self { source, target })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Absolute source path of an entry relative to the roots
    pub fn source_path(&self, relative: &Path) -> PathBuf {
        self.source.join(relative)
    }

    /// Absolute target path of an entry relative to the roots
    pub fn target_path(&self, relative: &Path) -> PathBuf {
        self.target.join(relative)
    }
}

fn validate_root(role: RootRole, path: &Path) -> Result<PathBuf> {
    let invalid = |problem| Error::InvalidRoot {
        role,
        path: path.to_path_buf(),
        problem,
    };

    if !path.is_absolute() {
        return Err(invalid(RootProblem::NotAbsolute));
    }

    let meta = fs::symlink_metadata(path).map_err(|_| invalid(RootProblem::NotFound))?;
    if meta.file_type().is_symlink() {
        return Err(invalid(RootProblem::IsSymlink));
    }
    if !meta.is_dir() {
        return Err(invalid(RootProblem::NotADirectory));
    }

    dunce::canonicalize(path).map_err(|e| lnkit_fs::Error::io(path, e).into())
}
