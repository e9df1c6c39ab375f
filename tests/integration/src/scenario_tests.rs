//! Scenario tests across config, engine and filesystem
//!
//! Each test walks through a situation a dotfiles user actually runs into,
//! using the public APIs of lnkit-core and lnkit-fs only.
#![cfg(unix)]

use lnkit_core::config::IGNORE_FILE;
use lnkit_core::{Config, ConfigSource, Event, Policy, ReconciliationEngine, Stats};
use lnkit_test_utils::{RecordingReporter, ScriptedInteraction, TestTrees};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

// =============================================================================
// Helpers
// =============================================================================

const DOTFILES: &str = r#"
.bashrc: {type: file, content: "alias ll='ls -l'"}
.gitconfig: {type: file, content: "[user]\n  name = me"}
.config:
  nvim:
    init.lua: {type: file, content: "vim.opt.number = true"}
  starship.toml: {type: file, content: "add_newline = false"}
"#;

fn policy(recursive: bool, fold: bool) -> Policy {
    Policy {
        recursive,
        fold,
        ..Policy::default()
    }
}

fn quiet() -> (ScriptedInteraction, RecordingReporter) {
    (ScriptedInteraction::always(false), RecordingReporter::new())
}

// =============================================================================
// Fresh machine
// =============================================================================

#[test]
fn test_fresh_machine_unfolded() {
    let trees = TestTrees::new().with_source(DOTFILES);
    let engine = trees.engine(policy(true, false));
    let (mut interaction, mut reporter) = quiet();

    let report = engine.link(&mut interaction, &mut reporter).unwrap();

    assert_eq!(report.linked.len(), 4);
    assert!(interaction.prompts.is_empty());
    trees.assert_target(
        r#"
.bashrc: {type: symlink, target: ../source/.bashrc}
.config:
  nvim:
    init.lua: {type: symlink, target: ../../../source/.config/nvim/init.lua}
  starship.toml: {type: symlink, target: ../../source/.config/starship.toml}
.gitconfig: {type: symlink, target: ../source/.gitconfig}
"#,
    );
}

#[test]
fn test_fresh_machine_folded() {
    let trees = TestTrees::new().with_source(DOTFILES);
    let engine = trees.engine(policy(true, true));
    let (mut interaction, mut reporter) = quiet();

    engine.link(&mut interaction, &mut reporter).unwrap();

    trees.assert_target(
        r#"
.bashrc: {type: symlink, target: ../source/.bashrc}
.config: {type: symlink, target: ../source/.config}
.gitconfig: {type: symlink, target: ../source/.gitconfig}
"#,
    );
    let stats = engine.stats().unwrap();
    assert_eq!(stats.linked_files, 2);
    assert_eq!(stats.linked_dirs, 1);
    assert_eq!(stats.unlinked, 0);
}

#[test]
fn test_flat_mode_leaves_directories_alone() {
    let trees = TestTrees::new().with_source(DOTFILES);
    let engine = trees.engine(Policy::default());
    let (mut interaction, mut reporter) = quiet();

    let report = engine.link(&mut interaction, &mut reporter).unwrap();

    // Without recursion a directory is just another entry to link
    assert_eq!(report.linked.len(), 3);
    trees.assert_target(
        r#"
.bashrc: {type: symlink, target: ../source/.bashrc}
.config: {type: symlink, target: ../source/.config}
.gitconfig: {type: symlink, target: ../source/.gitconfig}
"#,
    );
}

// =============================================================================
// Switching between fold and unfold
// =============================================================================

#[test]
fn test_switch_from_folded_to_unfolded() {
    let trees = TestTrees::new().with_source(DOTFILES);
    let (mut interaction, mut reporter) = quiet();

    trees
        .engine(policy(true, true))
        .link(&mut interaction, &mut reporter)
        .unwrap();

    // A folded link blocks the unfolded layout until it is removed
    let unfold = trees.engine(Policy {
        confirm: false,
        ..policy(true, false)
    });
    let blocked = unfold.link(&mut interaction, &mut reporter).unwrap();
    assert_eq!(blocked.skipped.len(), 1);
    assert_eq!(blocked.skipped[0].path, trees.target_path(".config"));

    let fold_unlink = trees.engine(Policy {
        confirm: false,
        ..policy(true, true)
    });
    let removed = fold_unlink.unlink(&mut interaction, &mut reporter).unwrap();
    assert_eq!(removed.unlinked.len(), 3);
    trees.assert_target("");

    unfold.link(&mut interaction, &mut reporter).unwrap();
    let stats = unfold.stats().unwrap();
    assert_eq!(
        stats,
        Stats {
            linked_files: 4,
            ..Stats::default()
        }
    );
}

// =============================================================================
// Existing files at the target
// =============================================================================

#[test]
fn test_existing_home_with_mixed_conflicts() {
    let trees = TestTrees::new().with_source(DOTFILES).with_target(
        r#"
.bashrc: {type: file, content: "alias ll='ls -l'"}
.gitconfig: {type: file, content: "[user]\n  name = someone else"}
.profile: {type: file, content: "untouched"}
"#,
    );
    let engine = trees.engine(Policy::default());
    // preview? no. delete? yes.
    let mut interaction = ScriptedInteraction::answers([false, true]);
    let mut reporter = RecordingReporter::new();

    let report = engine.link(&mut interaction, &mut reporter).unwrap();

    // Identical .bashrc is replaced silently; only .gitconfig prompts
    assert_eq!(interaction.prompts.len(), 2);
    assert!(interaction.prompts[1].contains(".gitconfig"));
    assert_eq!(
        report.replaced,
        vec![trees.target_path(".bashrc"), trees.target_path(".gitconfig")]
    );
    assert_eq!(report.linked, vec![trees.target_path(".config")]);
    trees.assert_target(
        r#"
.bashrc: {type: symlink, target: ../source/.bashrc}
.config: {type: symlink, target: ../source/.config}
.gitconfig: {type: symlink, target: ../source/.gitconfig}
.profile: {type: file, content: untouched}
"#,
    );
}

#[test]
fn test_foreign_link_is_repaired_only_with_consent() {
    let trees = TestTrees::new()
        .with_source(".bashrc: {type: file, content: mine}")
        .with_target(".bashrc: {type: symlink, target: /etc/skel/.bashrc}");
    let engine = trees.engine(Policy::default());

    let mut decline = ScriptedInteraction::always(false);
    let mut reporter = RecordingReporter::new();
    engine.link(&mut decline, &mut reporter).unwrap();
    trees.assert_target(".bashrc: {type: symlink, target: /etc/skel/.bashrc}");

    let mut accept = ScriptedInteraction::answers([false, true]);
    engine.link(&mut accept, &mut reporter).unwrap();
    trees.assert_target(".bashrc: {type: symlink, target: ../source/.bashrc}");

    let skipped = reporter.matching(|e| matches!(e, Event::Skipped { .. }));
    assert_eq!(skipped.len(), 1);
}

// =============================================================================
// Properties from the reconciliation contract
// =============================================================================

#[test]
fn test_stats_before_and_after_link() {
    let trees = TestTrees::new().with_source("file1.txt: {type: file, content: x}");
    let engine = trees.engine(Policy::default());

    let before = engine.stats().unwrap();
    assert_eq!((before.no_target, before.unlinked, before.linked_files), (1, 1, 0));

    let (mut interaction, mut reporter) = quiet();
    engine.link(&mut interaction, &mut reporter).unwrap();

    let after = engine.stats().unwrap();
    assert_eq!((after.linked_files, after.unlinked), (1, 0));
}

#[rstest]
#[case::flat(false, false)]
#[case::unfolded(true, false)]
#[case::folded(true, true)]
fn test_forced_link_is_idempotent(#[case] recursive: bool, #[case] fold: bool) {
    let trees = TestTrees::new().with_source(DOTFILES).with_target(
        r#"
.gitconfig: {type: file, content: stale}
.config:
  starship.toml: {type: symlink, target: /nowhere}
"#,
    );
    let engine = trees.engine(Policy {
        force: true,
        confirm: false,
        ..policy(recursive, fold)
    });
    let (mut interaction, mut reporter) = quiet();

    let first = engine.link(&mut interaction, &mut reporter).unwrap();
    let after_first = trees.target_yaml();
    let second = engine.link(&mut interaction, &mut reporter).unwrap();

    assert!(first.is_success());
    assert!(!second.has_changes());
    assert_eq!(after_first, trees.target_yaml());
}

#[rstest]
#[case::flat(false, false)]
#[case::unfolded(true, false)]
#[case::folded(true, true)]
fn test_link_unlink_round_trip(#[case] recursive: bool, #[case] fold: bool) {
    let original = ".profile: {type: file, content: keep}\n";
    let trees = TestTrees::new().with_source(DOTFILES).with_target(original);
    let engine = trees.engine(Policy {
        confirm: false,
        ..policy(recursive, fold)
    });
    let (mut interaction, mut reporter) = quiet();

    engine.link(&mut interaction, &mut reporter).unwrap();
    engine.unlink(&mut interaction, &mut reporter).unwrap();

    trees.assert_target(original);
    trees.assert_source(DOTFILES);
}

// =============================================================================
// Configuration flow
// =============================================================================

#[test]
fn test_config_and_ignore_file_drive_the_run() {
    let trees = TestTrees::new().with_source(
        r#"
.bashrc: {type: file, content: x}
README.md: {type: file, content: docs}
notes.swp: {type: file, content: junk}
"#,
    );
    let config_path = trees.source_path("lnkit.toml");
    fs::write(
        &config_path,
        format!(
            "[options]\nconfirm = false\nsource_dir = \"{}\"\ntarget_dir = \"{}\"\n\n[exceptions]\n\".bashrc\" = \"~/.bashrc.local\"\n",
            trees.source().display(),
            trees.target().display()
        ),
    )
    .unwrap();
    fs::write(trees.source_path(IGNORE_FILE), "README.md\n\n*.swp\n").unwrap();

    let loaded = Config::load_or_default(&config_path).unwrap();
    assert_eq!(loaded.source, ConfigSource::File(config_path.clone()));
    let mut config = loaded.config;
    assert_eq!(config.exceptions.len(), 1);

    let source = config.source_dir().unwrap();
    let added = config
        .extend_ignore_from_file(&source.join(IGNORE_FILE))
        .unwrap();
    assert_eq!(added, 2);

    let engine = ReconciliationEngine::new(
        &source,
        &config.target_dir().unwrap(),
        config.policy(false, false),
    )
    .unwrap();
    let (mut interaction, mut reporter) = quiet();
    engine.link(&mut interaction, &mut reporter).unwrap();

    trees.assert_target(".bashrc: {type: symlink, target: ../source/.bashrc}");
    let stats = engine.stats().unwrap();
    // lnkit.toml, .lnkitignore, README.md, notes.swp
    assert_eq!(stats.ignored, 4);
    assert_eq!(stats.linked_files, 1);
}

#[test]
fn test_invalid_roots_never_touch_disk() {
    let trees = TestTrees::new()
        .with_source(".bashrc: {type: file, content: x}")
        .with_target("existing: {type: file, content: y}");

    let inside = ReconciliationEngine::new(
        trees.source(),
        trees.source(),
        Policy::default(),
    );
    assert!(inside.is_err());

    let relative = ReconciliationEngine::new(
        std::path::Path::new("source"),
        trees.target(),
        Policy::default(),
    );
    assert!(relative.is_err());

    trees.assert_target("existing: {type: file, content: y}");
    assert!(lnkit_fs::path_exists(&trees.source_path(".bashrc")));
}
