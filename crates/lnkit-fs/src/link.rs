//! Symlink primitives
//!
//! These never follow a symlink at the path they are given: existence and
//! kind checks use `symlink_metadata`, so a dangling link is still an
//! existing entry.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::path::absolutize;
use crate::{Error, Result};

/// What occupies a path, without following a symlink at that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Nothing exists at the path
    Missing,
    /// A symlink (possibly dangling)
    Symlink,
    /// A directory
    Dir,
    /// A regular file or any other non-directory entry
    File,
}

/// Inspect what occupies `path`.
pub fn entry_kind(path: &Path) -> Result<EntryKind> {
    match fs::symlink_metadata(path) {
        Ok(meta) => {
            let file_type = meta.file_type();
            Ok(if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            })
        }
        // A regular file somewhere in the parent chain also means nothing is here
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            Ok(EntryKind::Missing)
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Returns true if anything (including a dangling symlink) exists at `path`.
pub fn path_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Read the link value at `link` and resolve it to an absolute path.
///
/// Relative link values are resolved against the directory holding the
/// link, the same way the OS resolves them.
pub fn read_link_absolute(link: &Path) -> Result<PathBuf> {
    let value = fs::read_link(link).map_err(|e| Error::io(link, e))?;
    let base = link.parent().unwrap_or(Path::new("/"));
    Ok(absolutize(&value, base))
}

/// Create a symlink at `link` pointing to `target`.
///
/// When `create_dirs` is set the parent directories of `link` are created
/// first. Fails if anything already exists at `link`.
pub fn create_symlink(target: &Path, link: &Path, create_dirs: bool) -> Result<()> {
    if create_dirs && let Some(parent) = link.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    if path_exists(link) {
        return Err(Error::AlreadyExists {
            path: link.to_path_buf(),
        });
    }

    symlink(target, link).map_err(|e| Error::io(link, e))?;
    tracing::debug!(link = %link.display(), target = %target.display(), "created symlink");
    Ok(())
}

/// Remove the symlink at `path`.
///
/// A missing path is not an error. Anything that is not a symlink is left
/// alone and reported as [`Error::NotASymlink`].
pub fn remove_symlink(path: &Path) -> Result<()> {
    match entry_kind(path)? {
        EntryKind::Missing => Ok(()),
        EntryKind::Symlink => {
            fs::remove_file(path).map_err(|e| Error::io(path, e))?;
            tracing::debug!(path = %path.display(), "removed symlink");
            Ok(())
        }
        EntryKind::Dir | EntryKind::File => Err(Error::NotASymlink {
            path: path.to_path_buf(),
        }),
    }
}

/// Remove whatever occupies `path`: a symlink, a file, or a directory tree.
///
/// Symlinks are removed themselves, never the entry they point at.
pub fn remove_path(path: &Path) -> Result<()> {
    let result = match entry_kind(path)? {
        EntryKind::Missing => return Ok(()),
        EntryKind::Symlink | EntryKind::File => fs::remove_file(path),
        EntryKind::Dir => fs::remove_dir_all(path),
    };
    result.map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), "removed path");
    Ok(())
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_reports_dangling_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

        assert_eq!(entry_kind(&link).unwrap(), EntryKind::Symlink);
        assert!(path_exists(&link));
        assert!(!link.exists());
    }

    #[test]
    fn test_entry_kind_below_regular_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file"), "x").unwrap();

        assert_eq!(entry_kind(&dir.path().join("file/child")).unwrap(), EntryKind::Missing);
    }

    #[test]
    fn test_read_link_absolute_resolves_against_link_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let link = dir.path().join("sub/link");
        std::os::unix::fs::symlink("../target.txt", &link).unwrap();

        assert_eq!(
            read_link_absolute(&link).unwrap(),
            crate::normalize(&dir.path().join("target.txt"))
        );
    }

    #[test]
    fn test_remove_symlink_refuses_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "data").unwrap();

        assert!(matches!(remove_symlink(&file), Err(Error::NotASymlink { .. })));
        assert!(file.exists());
    }
}
