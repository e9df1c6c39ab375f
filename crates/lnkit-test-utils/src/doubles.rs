//! Test doubles for the engine's ports.

use lnkit_core::{Event, Interaction, Reporter};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Answers prompts from a script and records what was asked.
///
/// Once the script runs out, every further prompt gets the fallback answer.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<bool>,
    fallback: bool,
    /// Every prompt shown, in order
    pub prompts: Vec<String>,
    /// Every (source, target) pair a diff was requested for
    pub previews: Vec<(PathBuf, PathBuf)>,
}

impl ScriptedInteraction {
    /// Answer every prompt with `answer`.
    pub fn always(answer: bool) -> Self {
        Self {
            fallback: answer,
            ..Self::default()
        }
    }

    /// Answer prompts in order, then decline.
    pub fn answers(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(self.fallback)
    }

    fn preview_diff(&mut self, source: &Path, target: &Path) {
        self.previews
            .push((source.to_path_buf(), target.to_path_buf()));
    }
}

/// Keeps every reported event.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events of one kind, matched by a predicate.
    pub fn matching(&self, predicate: impl Fn(&Event) -> bool) -> Vec<&Event> {
        self.events.iter().filter(|e| predicate(e)).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
