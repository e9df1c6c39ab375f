//! Error types for lnkit-core

use std::fmt;
use std::path::PathBuf;

/// Result type for lnkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two managed roots an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootRole {
    Source,
    Target,
}

impl fmt::Display for RootRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootRole::Source => write!(f, "Source"),
            RootRole::Target => write!(f, "Target"),
        }
    }
}

/// Why a root directory was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootProblem {
    NotAbsolute,
    NotFound,
    NotADirectory,
    IsSymlink,
}

impl fmt::Display for RootProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootProblem::NotAbsolute => write!(f, "is not an absolute path"),
            RootProblem::NotFound => write!(f, "not found"),
            RootProblem::NotADirectory => write!(f, "is not a directory"),
            RootProblem::IsSymlink => write!(f, "must not be a symlink"),
        }
    }
}

/// Errors that can occur in lnkit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Something other than a file exists at the configuration path
    #[error("Configuration path {path} is not a file")]
    ConfigNotAFile { path: PathBuf },

    /// A source or target root failed validation
    #[error("{role} directory {path} {problem}")]
    InvalidRoot {
        role: RootRole,
        path: PathBuf,
        problem: RootProblem,
    },

    /// Source and target resolve to the same directory
    #[error("Source and target are the same directory: {path}")]
    RootsEqual { path: PathBuf },

    /// The target root lies inside the source root
    #[error("Target directory {target_root} is a child of source {source_root}")]
    TargetInsideSource {
        source_root: PathBuf,
        target_root: PathBuf,
    },

    /// An ignore pattern could not be compiled
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The source tree could not be enumerated
    #[error("Error walking directory {path}: {message}")]
    Walk { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from lnkit-fs
    #[error(transparent)]
    Fs(#[from] lnkit_fs::Error),
}
