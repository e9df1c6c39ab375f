//! [`TestTrees`]: a scratch source/target pair for reconciliation tests.

use lnkit_core::{Policy, ReconciliationEngine};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::tree::{assert_tree, create_from_yaml, to_yaml};

/// A temporary directory holding `source/` and `target/` roots.
///
/// Paths are canonical so they compare equal to what the engine resolves.
///
/// # Example
///
/// ```rust,no_run
/// use lnkit_test_utils::TestTrees;
///
/// let trees = TestTrees::new()
///     .with_source("file1.txt: {type: file, content: one}")
///     .with_target("");
/// trees.assert_target("{}");
/// ```
pub struct TestTrees {
    _temp: TempDir,
    root: PathBuf,
    source: PathBuf,
    target: PathBuf,
}

impl Default for TestTrees {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTrees {
    /// Create empty `source/` and `target/` directories.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("TestTrees::new: failed to create temp dir");
        let root = dunce::canonicalize(temp.path())
            .expect("TestTrees::new: failed to canonicalize temp dir");
        let source = root.join("source");
        let target = root.join("target");
        std::fs::create_dir(&source).expect("TestTrees::new: failed to create source");
        std::fs::create_dir(&target).expect("TestTrees::new: failed to create target");

        Self {
            _temp: temp,
            root,
            source,
            target,
        }
    }

    /// Populate the source tree from YAML.
    pub fn with_source(self, yaml: &str) -> Self {
        create_from_yaml(&self.source, yaml);
        self
    }

    /// Populate the target tree from YAML.
    pub fn with_target(self, yaml: &str) -> Self {
        create_from_yaml(&self.target, yaml);
        self
    }

    /// The temp directory holding both roots.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn source_path(&self, relative: &str) -> PathBuf {
        self.source.join(relative)
    }

    pub fn target_path(&self, relative: &str) -> PathBuf {
        self.target.join(relative)
    }

    /// Build an engine over these roots.
    ///
    /// # Panics
    /// Panics if the engine rejects the roots or the policy.
    pub fn engine(&self, policy: Policy) -> ReconciliationEngine {
        ReconciliationEngine::new(&self.source, &self.target, policy)
            .expect("TestTrees::engine: failed to build engine")
    }

    /// The target tree serialized as YAML.
    pub fn target_yaml(&self) -> String {
        to_yaml(&self.target)
    }

    /// Assert that the source tree matches `yaml`.
    pub fn assert_source(&self, yaml: &str) {
        assert_tree(&self.source, yaml);
    }

    /// Assert that the target tree matches `yaml`.
    pub fn assert_target(&self, yaml: &str) {
        assert_tree(&self.target, yaml);
    }
}
