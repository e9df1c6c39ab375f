//! Path resolution helpers
//!
//! All comparisons here are lexical: `..` and `.` components are folded
//! without touching the filesystem, so a dangling link value can still be
//! classified.

use regex::{Captures, Regex};
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use crate::{Error, Result};

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("env var pattern is valid")
});

/// Lexically normalize a path.
///
/// Removes `.` components and folds `..` into the preceding component.
/// A `..` at the root of an absolute path is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match out.components().next_back() {
                    Some(Component::Normal(_)) => out.pop(),
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => true,
                    _ => false,
                };
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Make `path` absolute against `base` and normalize it.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Expand a user supplied path.
///
/// - a leading `~` becomes the home directory
/// - `$VAR` and `${VAR}` are replaced from the environment (unset variables
///   expand to the empty string)
/// - the result is made absolute against the current directory
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = ENV_VAR.replace_all(raw, |caps: &Captures| {
        let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        std::env::var(name).unwrap_or_default()
    });

    let path = if let Some(rest) = expanded.strip_prefix('~') {
        let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
        home.join(rest.trim_start_matches(['/', '\\']))
    } else {
        PathBuf::from(expanded.as_ref())
    };

    if path.is_absolute() {
        return Ok(normalize(&path));
    }

    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    Ok(absolutize(&path, &cwd))
}

/// Returns true if `child` lies strictly below `ancestor`.
///
/// Equal paths are not descendants of each other.
pub fn is_descendant(child: &Path, ancestor: &Path) -> bool {
    let child = normalize(child);
    let ancestor = normalize(ancestor);
    child != ancestor && child.starts_with(&ancestor)
}
