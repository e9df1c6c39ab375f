//! Shared test utilities for the lnkit workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: build and inspect directory trees described in YAML
//! - [`trees`]: [`TestTrees`], a scratch source/target pair
//! - [`doubles`]: scripted [`Interaction`](lnkit_core::Interaction) and
//!   recording [`Reporter`](lnkit_core::Reporter)

pub mod doubles;
pub mod tree;
pub mod trees;

pub use doubles::{RecordingReporter, ScriptedInteraction};
pub use tree::{Node, Tree, assert_tree, create_from_yaml, parse_yaml, read_tree, to_yaml};
pub use trees::TestTrees;
