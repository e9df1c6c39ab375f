//! ReconciliationEngine
//!
//! The engine provides three operations over one validated pair of roots:
//! - **link**: create or repair a link at the target for every source entry
//! - **unlink**: remove links at the target that this tool manages
//! - **stats**: count entries by state without touching the filesystem
//!
//! Each operation drives the [`walker`](crate::walker) with its own visitor.

mod link;
mod report;
mod stats;
mod unlink;

pub use report::{FailedEntry, RunReport, SkippedEntry};
pub use stats::Stats;

use std::path::Path;

use crate::Result;
use crate::ignore::IgnoreMatcher;
use crate::interaction::Interaction;
use crate::policy::{Policy, Roots};
use crate::reporter::{Event, Reporter};
use crate::state::{Compare, TargetState, classify};
use crate::walker::{WalkEntry, walk};

use link::LinkVisitor;
use stats::StatsVisitor;
use unlink::UnlinkVisitor;

/// Engine for reconciling a source tree with a target directory
#[derive(Debug)]
pub struct ReconciliationEngine {
    roots: Roots,
    policy: Policy,
    matcher: IgnoreMatcher,
}

impl ReconciliationEngine {
    /// Create a new engine.
    ///
    /// # Errors
    ///
    /// Fails if either root is invalid or an ignore pattern does not
    /// compile. Nothing is touched on disk in either case.
    pub fn new(source: &Path, target: &Path, policy: Policy) -> Result<Self> {
        let roots = Roots::new(source, target)?;
        let matcher = IgnoreMatcher::new(policy.ignore.iter().cloned())?;

        tracing::debug!(
            source = %roots.source().display(),
            target = %roots.target().display(),
            recursive = policy.recursive,
            fold = policy.fold,
            "engine ready"
        );

        Ok(Self {
            roots,
            policy,
            matcher,
        })
    }

    pub fn roots(&self) -> &Roots {
        &self.roots
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Classify a single entry, given relative to both roots.
    pub fn classify(&self, relative: &Path) -> Result<TargetState> {
        classify(&self.roots, &self.matcher, relative, Compare::Contents)
    }

    /// Link every source entry into the target.
    ///
    /// Per-entry failures are reported and the walk continues. Only walk
    /// errors abort.
    pub fn link(
        &self,
        interaction: &mut dyn Interaction,
        reporter: &mut dyn Reporter,
    ) -> Result<RunReport> {
        let _span = tracing::info_span!("link").entered();
        let mut visitor = LinkVisitor::new(&self.policy, interaction, reporter);
        walk(
            &self.roots,
            &self.matcher,
            self.policy.descends_into_dirs(),
            &mut visitor,
        )?;
        Ok(visitor.into_report())
    }

    /// Remove target links that point into the source tree.
    ///
    /// Real files and directories at the target are never touched.
    pub fn unlink(
        &self,
        interaction: &mut dyn Interaction,
        reporter: &mut dyn Reporter,
    ) -> Result<RunReport> {
        let _span = tracing::info_span!("unlink").entered();
        let mut visitor = UnlinkVisitor::new(&self.policy, interaction, reporter);
        walk(
            &self.roots,
            &self.matcher,
            self.policy.descends_into_dirs(),
            &mut visitor,
        )?;
        Ok(visitor.into_report())
    }

    /// Count entries by state.
    pub fn stats(&self) -> Result<Stats> {
        let _span = tracing::info_span!("stats").entered();
        let mut visitor = StatsVisitor::default();
        walk(
            &self.roots,
            &self.matcher,
            self.policy.descends_into_dirs(),
            &mut visitor,
        )?;
        Ok(visitor.stats)
    }
}

/// A container is descended only when its target is absent or a real
/// directory. Anything else at the target is handled as a unit.
pub(crate) fn container_descends(state: TargetState) -> bool {
    matches!(state, TargetState::Missing | TargetState::ExistsIdentical)
}

/// Sends events to the reporter and keeps the run report in step.
pub(crate) struct Emitter<'a> {
    reporter: &'a mut dyn Reporter,
    report: RunReport,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(reporter: &'a mut dyn Reporter) -> Self {
        Self {
            reporter,
            report: RunReport::default(),
        }
    }

    pub(crate) fn emit(&mut self, event: Event) {
        self.reporter.report(&event);
        self.report.record(&event);
    }

    pub(crate) fn skipped(&mut self, entry: &WalkEntry, reason: String) {
        self.emit(Event::Skipped {
            target: entry.target_path.clone(),
            reason,
        });
    }

    pub(crate) fn failed(&mut self, target: &Path, error: impl std::fmt::Display) {
        tracing::warn!(target = %target.display(), error = %error, "entry failed");
        self.emit(Event::Failed {
            target: target.to_path_buf(),
            message: error.to_string(),
        });
    }

    pub(crate) fn into_report(self) -> RunReport {
        self.report
    }
}
