//! Console rendering of engine events, run summaries and stats

use std::path::Path;

use colored::{ColoredString, Colorize};
use lnkit_core::{Event, Reporter, RunReport, Stats};

/// Prints every event as one colored line on stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: &Event) {
        println!("{}", event_line(event));
    }
}

fn link_string(target: &Path, source: &Path) -> ColoredString {
    format!("{} → {}", target.display(), source.display()).blue()
}

pub fn event_line(event: &Event) -> String {
    match event {
        Event::Linked { target, source } => {
            format!("{} {}", "Linked".green().bold(), link_string(target, source))
        }
        Event::Replaced { target, source } => {
            format!("{} {}", "Replaced".yellow().bold(), link_string(target, source))
        }
        Event::Unlinked { target, source } => format!(
            "{} {}",
            "Removed symlink".green().bold(),
            link_string(target, source)
        ),
        Event::Skipped { target, reason } => format!(
            "{} {} ({})",
            "Skipped".yellow(),
            target.display(),
            reason.dimmed()
        ),
        Event::Failed { target, message } => {
            format!("{} {}: {}", "Failed".red().bold(), target.display(), message)
        }
    }
}

/// One-line totals after a link or unlink run.
pub fn summary_line(report: &RunReport) -> String {
    let mut parts = Vec::new();
    if !report.linked.is_empty() {
        parts.push(format!("{} linked", report.linked.len()));
    }
    if !report.replaced.is_empty() {
        parts.push(format!("{} replaced", report.replaced.len()));
    }
    if !report.unlinked.is_empty() {
        parts.push(format!("{} unlinked", report.unlinked.len()));
    }
    if !report.skipped.is_empty() {
        parts.push(format!("{} skipped", report.skipped.len()));
    }
    if !report.failed.is_empty() {
        parts.push(format!("{} failed", report.failed.len()));
    }

    let status = if report.is_success() {
        "OK".green().bold()
    } else {
        "FAILED".red().bold()
    };

    if parts.is_empty() {
        format!("{} {} Nothing to do", "=>".blue().bold(), status)
    } else {
        format!("{} {} {}", "=>".blue().bold(), status, parts.join(", "))
    }
}

struct Node {
    text: String,
    icon: &'static str,
    paint: fn(&str) -> ColoredString,
    children: Vec<Node>,
}

impl Node {
    fn new(text: String, icon: &'static str, paint: fn(&str) -> ColoredString) -> Self {
        Self {
            text,
            icon,
            paint,
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

fn plain(s: &str) -> ColoredString {
    s.normal()
}

fn green(s: &str) -> ColoredString {
    s.green()
}

fn red(s: &str) -> ColoredString {
    s.red()
}

fn blue(s: &str) -> ColoredString {
    s.blue()
}

/// Render stats as a tree:
///
/// ```text
/// ╰─ Stats
///    ├─ ✔ Linked files (2)
///    ...
/// ```
pub fn render_stats(stats: &Stats) -> String {
    let reason = |text: &str, count: usize| Node::new(format!("{text} ({count})"), "•", red);

    let root = Node::new("Stats".to_string(), "", plain).with_children(vec![
        Node::new(format!("Linked files ({})", stats.linked_files), "✔", green),
        Node::new(format!("Linked directories ({})", stats.linked_dirs), "✔", green),
        Node::new(format!("Unlinked files ({})", stats.unlinked), "✖", red).with_children(vec![
            reason("Target does not exist", stats.no_target),
            reason("Incorrect symlink", stats.incorrect_symlink),
            reason("Same content, not linked", stats.same_contents),
            reason("Different content", stats.different_contents),
        ]),
        Node::new(format!("Ignored files ({})", stats.ignored), "―", blue),
    ]);

    let mut out = String::new();
    render_node(&root, "", true, &mut out);
    out
}

fn render_node(node: &Node, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "╰─ " } else { "├─ " };

    let mut line = format!("{prefix}{connector}");
    if !node.icon.is_empty() {
        line.push_str(node.icon);
        line.push(' ');
    }
    line.push_str(&node.text);
    out.push_str(&(node.paint)(&line).to_string());
    out.push('\n');

    let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
    for (i, child) in node.children.iter().enumerate() {
        render_node(child, &child_prefix, i + 1 == node.children.len(), out);
    }
}
