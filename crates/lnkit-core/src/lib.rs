//! Reconciliation engine for lnkit
//!
//! This crate decides, for every entry of a source tree, what relationship
//! its target path has to it and what to do about it:
//!
//! - **Classification**: seven [`TargetState`]s computed fresh from disk
//! - **Walking**: depth-first traversal with recursion and fold policy
//! - **ReconciliationEngine**: link, unlink and stats operations
//! - **Configuration**: the `lnkit.toml` model and `.lnkitignore` handling
//!
//! # Architecture
//!
//! ```text
//!              lnkit-cli
//!                  |
//!             lnkit-core
//!   engine -> walker -> state -> ignore
//!                  |
//!              lnkit-fs
//! ```
//!
//! Prompts and per-entry output go through the [`Interaction`] and
//! [`Reporter`] ports so the engine never talks to a terminal itself.
//!
//! # Example
//!
//! ```no_run
//! use lnkit_core::{NonInteractive, Policy, ReconciliationEngine, TracingReporter};
//! use std::path::Path;
//!
//! let engine = ReconciliationEngine::new(
//!     Path::new("/home/me/dotfiles"),
//!     Path::new("/home/me"),
//!     Policy::default(),
//! )?;
//! let report = engine.link(&mut NonInteractive, &mut TracingReporter)?;
//! assert!(report.is_success());
//! # Ok::<(), lnkit_core::Error>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod ignore;
pub mod interaction;
pub mod policy;
pub mod reporter;
pub mod state;
pub mod walker;

pub use config::{Config, ConfigSource, LoadedConfig, Options};
pub use engine::{FailedEntry, ReconciliationEngine, RunReport, SkippedEntry, Stats};
pub use error::{Error, Result, RootProblem, RootRole};
pub use ignore::IgnoreMatcher;
pub use interaction::{Interaction, NonInteractive};
pub use policy::{Policy, Roots};
pub use reporter::{Event, Reporter, TracingReporter};
pub use state::{Compare, TargetState, classify};
pub use walker::{Visitor, WalkEntry, walk};
