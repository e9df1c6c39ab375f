//! Tests for the stats operation

#![cfg(unix)]

use lnkit_core::{Policy, Stats};
use lnkit_test_utils::{RecordingReporter, ScriptedInteraction, TestTrees};
use pretty_assertions::assert_eq;

fn policy(recursive: bool, fold: bool) -> Policy {
    Policy {
        confirm: false,
        recursive,
        fold,
        ignore: vec!["*.git".into()],
        ..Policy::default()
    }
}

#[test]
fn test_stats_before_and_after_link() {
    let trees = TestTrees::new().with_source("file1.txt: {type: file, content: one}");
    let engine = trees.engine(policy(false, false));

    let before = engine.stats().unwrap();
    assert_eq!(
        before,
        Stats {
            no_target: 1,
            unlinked: 1,
            ..Stats::default()
        }
    );

    engine
        .link(&mut ScriptedInteraction::always(false), &mut RecordingReporter::new())
        .unwrap();

    let after = engine.stats().unwrap();
    assert_eq!(
        after,
        Stats {
            linked_files: 1,
            ..Stats::default()
        }
    );
}

#[test]
fn test_stats_counts_every_state() {
    let trees = TestTrees::new()
        .with_source(
            r#"
.git:
  HEAD: {type: file, content: ""}
linked: {type: file, content: l}
missing: {type: file, content: m}
internal: {type: file, content: i}
external: {type: file, content: e}
same: {type: file, content: s}
different: {type: file, content: d}
"#,
        )
        .with_target(
            r#"
linked: {type: symlink, target: ../source/linked}
internal: {type: symlink, target: ../source/same}
external: {type: symlink, target: /opt/elsewhere}
same: {type: file, content: s}
different: {type: file, content: changed}
"#,
        );

    let stats = trees.engine(policy(false, false)).stats().unwrap();

    assert_eq!(
        stats,
        Stats {
            linked_files: 1,
            linked_dirs: 0,
            unlinked: 5,
            same_contents: 1,
            different_contents: 1,
            incorrect_symlink: 2,
            no_target: 1,
            ignored: 1,
        }
    );
}

#[test]
fn test_stats_follow_recursion_policy() {
    let trees = TestTrees::new().with_source(
        r#"
d:
  a: {type: file, content: a}
  b: {type: file, content: b}
f: {type: file, content: f}
"#,
    );

    let flat = trees.engine(policy(false, false)).stats().unwrap();
    let unfolded = trees.engine(policy(true, false)).stats().unwrap();

    // The directory counts once as a unit, or not at all as a container
    assert_eq!(flat.no_target, 2);
    assert_eq!(unfolded.no_target, 3);
}

#[test]
fn test_linked_directory_counts_as_linked_dir() {
    let trees = TestTrees::new()
        .with_source("d:\n  a: {type: file, content: a}")
        .with_target("d: {type: symlink, target: ../source/d}");

    let stats = trees.engine(policy(true, true)).stats().unwrap();

    assert_eq!(stats.linked_dirs, 1);
    assert_eq!(stats.linked_files, 0);
    assert_eq!(stats.linked(), 1);
}

#[test]
fn test_stats_never_mutate() {
    let target = "same: {type: file, content: s}\n";
    let trees = TestTrees::new()
        .with_source("same: {type: file, content: s}\nnew: {type: file, content: n}")
        .with_target(target);

    trees.engine(policy(true, false)).stats().unwrap();

    trees.assert_target(target);
}
