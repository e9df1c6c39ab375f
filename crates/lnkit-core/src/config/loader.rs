//! Config file discovery and loading

use std::path::{Path, PathBuf};

use lnkit_fs::{ConfigStore, path_exists, read_lines};

use crate::{Error, Result};

use super::Config;

/// Name of the optional ignore file read from the source directory
pub const IGNORE_FILE: &str = ".lnkitignore";

/// Where a loaded config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// A config together with where it was loaded from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

impl Config {
    /// Load a config file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if nothing exists at `path` and
    /// [`Error::ConfigNotAFile`] if something other than a file does.
    pub fn load(path: &Path) -> Result<Self> {
        if !path_exists(path) {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(Error::ConfigNotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(ConfigStore::new().load(path)?)
    }

    /// Load `path`, or fall back to the defaults when nothing is there.
    pub fn load_or_default(path: &Path) -> Result<LoadedConfig> {
        match Config::load(path) {
            Ok(config) => Ok(LoadedConfig {
                config,
                source: ConfigSource::File(path.to_path_buf()),
            }),
            Err(Error::ConfigNotFound { .. }) => Ok(LoadedConfig {
                config: Config::default(),
                source: ConfigSource::Defaults,
            }),
            Err(e) => Err(e),
        }
    }

    /// Append patterns from an ignore file to the ignore list.
    ///
    /// A missing file adds nothing. Returns the number of patterns added.
    pub fn extend_ignore_from_file(&mut self, path: &Path) -> Result<usize> {
        if !path_exists(path) {
            tracing::debug!(path = %path.display(), "no ignore file found");
            return Ok(0);
        }

        let patterns = read_lines(path)?;
        tracing::debug!(path = %path.display(), ?patterns, "adding ignore rules");
        let added = patterns.len();
        self.options.ignore.extend(patterns);
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_or_default(&dir.path().join("lnkit.toml")).unwrap();
        assert_eq!(loaded.source, ConfigSource::Defaults);
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lnkit.toml");
        fs::write(&path, "[options]\ncreate_dirs = false\n").unwrap();

        let loaded = Config::load_or_default(&path).unwrap();

        assert_eq!(loaded.source, ConfigSource::File(path));
        assert!(!loaded.config.options.create_dirs);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lnkit.toml");
        fs::write(&path, "[options\n").unwrap();

        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    fn test_yaml_config_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lnkit.yaml");
        fs::write(&path, "options:\n  force: true\n").unwrap();

        assert!(Config::load(&path).unwrap().options.force);
    }

    #[test]
    fn test_load_missing_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_directory_at_config_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lnkit.toml");
        fs::create_dir(&path).unwrap();

        let err = Config::load_or_default(&path).unwrap_err();

        assert!(matches!(err, Error::ConfigNotAFile { .. }));
        assert!(err.to_string().contains("is not a file"));
    }

    #[test]
    fn test_ignore_file_appends_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(IGNORE_FILE);
        fs::write(&path, "*.swp\n\nREADME.md\n").unwrap();

        let mut config = Config::default();
        let added = config.extend_ignore_from_file(&path).unwrap();

        assert_eq!(added, 2);
        assert_eq!(
            config.options.ignore,
            vec!["lnkit.toml", ".lnkitignore", "*.git", "*.swp", "README.md"]
        );
    }

    #[test]
    fn test_missing_ignore_file_adds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        assert_eq!(config.extend_ignore_from_file(&dir.path().join(IGNORE_FILE)).unwrap(), 0);
        assert_eq!(config.options.ignore.len(), 3);
    }
}
