//! The lnkit config file model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use lnkit_fs::expand_path;

use crate::Result;
use crate::policy::Policy;

/// The `[options]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Ask before removing links during unlink
    pub confirm: bool,
    /// Replace modified files and foreign links without asking
    pub force: bool,
    /// Create missing parent directories of new links
    pub create_dirs: bool,
    pub source_dir: String,
    pub target_dir: String,
    /// Glob patterns matched against entry base names
    pub ignore: Vec<String>,
    /// Default log level when neither `RUST_LOG` nor `--verbose` is given
    pub log_level: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            confirm: true,
            force: false,
            create_dirs: true,
            source_dir: ".".to_string(),
            target_dir: "~".to_string(),
            ignore: vec![
                "lnkit.toml".to_string(),
                ".lnkitignore".to_string(),
                "*.git".to_string(),
            ],
            log_level: "info".to_string(),
        }
    }
}

/// A parsed lnkit config file
///
/// # Example
///
/// ```
/// use lnkit_core::config::Config;
///
/// let config: Config = toml::from_str(r#"
/// [options]
/// force = true
/// "#).unwrap();
///
/// assert!(config.options.force);
/// assert!(config.options.confirm);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: Options,

    /// Explicit source to target overrides, keyed by source path.
    ///
    /// Parsed and kept, but not applied by the walker.
    #[serde(default)]
    pub exceptions: BTreeMap<String, String>,
}

impl Config {
    /// Expanded, absolute source directory
    pub fn source_dir(&self) -> Result<PathBuf> {
        Ok(expand_path(&self.options.source_dir)?)
    }

    /// Expanded, absolute target directory
    pub fn target_dir(&self) -> Result<PathBuf> {
        Ok(expand_path(&self.options.target_dir)?)
    }

    /// Build the engine policy for one run.
    pub fn policy(&self, recursive: bool, fold: bool) -> Policy {
        Policy {
            confirm: self.options.confirm,
            force: self.options.force,
            create_dirs: self.options.create_dirs,
            recursive,
            fold,
            ignore: self.options.ignore.clone(),
        }
    }
}
