//! SHA-256 content digests
//!
//! Files are digested over their bytes. Directories get a tree digest built
//! from their sorted entries, so two directories compare equal exactly when
//! they hold the same relative paths with the same kinds, file contents and
//! link values.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::path::Path;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of a file's contents.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn compute_file_checksum(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher).map_err(|e| Error::io(path, e))?;
    Ok(format!("{}{:x}", PREFIX, hasher.finalize()))
}

/// Compute a tree checksum over everything below `dir`.
///
/// Symlinks inside the tree are not followed; their link value is digested
/// instead.
pub fn compute_tree_checksum(dir: &Path) -> Result<String> {
    let mut hasher = Sha256::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        let rel = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            let value = std::fs::read_link(entry.path()).map_err(|e| Error::io(entry.path(), e))?;
            hasher.update(format!("l\0{}\0{}\n", rel, value.display()).as_bytes());
        } else if file_type.is_dir() {
            hasher.update(format!("d\0{}\n", rel).as_bytes());
        } else {
            let digest = compute_file_checksum(entry.path())?;
            hasher.update(format!("f\0{}\0{}\n", rel, digest).as_bytes());
        }
    }

    Ok(format!("{}{:x}", PREFIX, hasher.finalize()))
}

/// Compute the checksum of a file or directory, whichever `path` is.
pub fn compute_path_checksum(path: &Path) -> Result<String> {
    let meta = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if meta.is_dir() {
        compute_tree_checksum(path)
    } else {
        compute_file_checksum(path)
    }
}

/// Compare the contents of two paths.
///
/// A file is never equal to a directory. Two directories are compared by
/// tree checksum, two files by file checksum.
pub fn contents_equal(a: &Path, b: &Path) -> Result<bool> {
    let meta_a = std::fs::metadata(a).map_err(|e| Error::io(a, e))?;
    let meta_b = std::fs::metadata(b).map_err(|e| Error::io(b, e))?;

    if meta_a.is_dir() != meta_b.is_dir() {
        return Ok(false);
    }

    Ok(compute_path_checksum(a)? == compute_path_checksum(b)?)
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    match err.into_io_error() {
        Some(source) => Error::io(path, source),
        None => Error::io(
            path,
            std::io::Error::other("filesystem loop while computing tree checksum"),
        ),
    }
}
