//! Ignore pattern matching
//!
//! Patterns are shell globs matched against an entry's base name only, so
//! `*.git` skips a `.git` directory at any depth but `a/b` never matches.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::ffi::OsStr;

use crate::{Error, Result};

/// A compiled set of ignore globs.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    set: GlobSet,
}

impl IgnoreMatcher {
    /// Compile `patterns`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIgnorePattern`] for the first pattern that
    /// fails to compile.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();

        for pattern in &patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| Error::InvalidIgnorePattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            builder.add(glob);
        }

        let set = builder.build().map_err(|source| Error::InvalidIgnorePattern {
            pattern: patterns.join(", "),
            source,
        })?;

        Ok(Self { set })
    }

    /// A matcher that ignores nothing.
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
        }
    }

    /// Returns true if `name` (a single path component) matches any pattern.
    pub fn is_ignored(&self, name: &OsStr) -> bool {
        self.set.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignored(patterns: &[&str], name: &str) -> bool {
        IgnoreMatcher::new(patterns.iter().copied())
            .unwrap()
            .is_ignored(OsStr::new(name))
    }

    #[test]
    fn test_matches_exact_name() {
        assert!(ignored(&["lnkit.toml"], "lnkit.toml"));
        assert!(!ignored(&["lnkit.toml"], "lnkit.toml.bak"));
    }

    #[test]
    fn test_star_matches_hidden_names() {
        assert!(ignored(&["*.git"], ".git"));
        assert!(ignored(&["*.swp"], ".vimrc.swp"));
    }

    #[test]
    fn test_question_and_class_patterns() {
        assert!(ignored(&["file?.txt"], "file1.txt"));
        assert!(ignored(&["[ab].conf"], "b.conf"));
        assert!(!ignored(&["[ab].conf"], "c.conf"));
    }

    #[test]
    fn test_empty_matcher_ignores_nothing() {
        assert!(!IgnoreMatcher::empty().is_ignored(OsStr::new("anything")));
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        let err = IgnoreMatcher::new(["ok", "[unclosed"]).unwrap_err();
        match err {
            Error::InvalidIgnorePattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
