//! Error types for lnkit-fs

use std::path::PathBuf;

/// Result type for lnkit-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lnkit-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Path already exists at {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Path {path} is not a symlink")]
    NotASymlink { path: PathBuf },

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
