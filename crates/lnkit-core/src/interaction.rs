//! User interaction port
//!
//! The engine asks before destructive replacements and before removing
//! foreign links. Front ends decide how those questions reach a person.

use std::path::Path;

pub trait Interaction {
    /// Ask a yes/no question. Returning false declines.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Show how `target` differs from `source`.
    fn preview_diff(&mut self, source: &Path, target: &Path);
}

/// Declines every question and shows nothing.
///
/// Used when no person is available to answer, so nothing destructive
/// happens without an explicit `force`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonInteractive;

impl Interaction for NonInteractive {
    fn confirm(&mut self, prompt: &str) -> bool {
        tracing::debug!(prompt, "declining prompt without a terminal");
        false
    }

    fn preview_diff(&mut self, _source: &Path, _target: &Path) {}
}
