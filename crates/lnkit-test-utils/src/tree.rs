//! Directory trees described in YAML.
//!
//! A mapping is a directory, `~` (null) is an empty directory, and leaves
//! carry a `type` key:
//!
//! ```yaml
//! dotfiles:
//!   .vimrc: {type: file, content: "set number"}
//!   nvim: ~
//! home:
//!   .vimrc: {type: symlink, target: ../dotfiles/.vimrc}
//! ```
//!
//! Symlink targets are written as-is when creating a tree. When reading a
//! tree back, absolute targets that stay near the tree are made relative to
//! the link's directory so fixtures are independent of the temp directory
//! they live in.
//!
//! All functions panic with a descriptive message on malformed input or
//! I/O failure; they are meant for tests only.

use pretty_assertions::assert_eq;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Entries of one directory, sorted by name.
pub type Tree = BTreeMap<String, Node>;

/// One entry in a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(String),
    Symlink(String),
    Dir(Tree),
}

/// Parse a YAML tree description.
///
/// # Panics
/// Panics if the YAML is invalid or does not describe a tree.
pub fn parse_yaml(yaml: &str) -> Tree {
    let value: Value = serde_yaml::from_str(yaml)
        .unwrap_or_else(|e| panic!("invalid tree YAML: {e}\n{yaml}"));
    match value {
        Value::Null => Tree::new(),
        Value::Mapping(mapping) => parse_dir(&mapping),
        other => panic!("tree YAML must be a mapping, got {other:?}"),
    }
}

fn parse_dir(mapping: &Mapping) -> Tree {
    mapping
        .iter()
        .map(|(key, value)| {
            let name = key
                .as_str()
                .unwrap_or_else(|| panic!("entry names must be strings, got {key:?}"));
            (name.to_string(), parse_node(name, value))
        })
        .collect()
}

fn parse_node(name: &str, value: &Value) -> Node {
    let mapping = match value {
        Value::Null => return Node::Dir(Tree::new()),
        Value::Mapping(mapping) => mapping,
        other => panic!("unsupported value for {name}: {other:?}"),
    };

    let field = |key: &str| mapping.get(key).and_then(Value::as_str);
    match field("type") {
        None => Node::Dir(parse_dir(mapping)),
        Some("file") => Node::File(
            field("content")
                .unwrap_or_else(|| panic!("file {name} missing 'content'"))
                .to_string(),
        ),
        Some("symlink") => Node::Symlink(
            field("target")
                .unwrap_or_else(|| panic!("symlink {name} missing 'target'"))
                .to_string(),
        ),
        Some(other) => panic!("unsupported type {other:?} for {name}"),
    }
}

/// Create the tree described by `yaml` under `root`.
///
/// `root` is created if needed; existing entries are left alone.
pub fn create_from_yaml(root: &Path, yaml: &str) {
    fs::create_dir_all(root).unwrap_or_else(|e| panic!("create {}: {e}", root.display()));
    create_tree(root, &parse_yaml(yaml));
}

fn create_tree(base: &Path, tree: &Tree) {
    for (name, node) in tree {
        let path = base.join(name);
        match node {
            Node::File(content) => fs::write(&path, content)
                .unwrap_or_else(|e| panic!("write {}: {e}", path.display())),
            Node::Symlink(target) => make_symlink(Path::new(target), &path),
            Node::Dir(children) => {
                fs::create_dir_all(&path)
                    .unwrap_or_else(|e| panic!("create {}: {e}", path.display()));
                create_tree(&path, children);
            }
        }
    }
}

#[cfg(unix)]
fn make_symlink(target: &Path, link: &Path) {
    std::os::unix::fs::symlink(target, link)
        .unwrap_or_else(|e| panic!("symlink {}: {e}", link.display()));
}

#[cfg(windows)]
fn make_symlink(target: &Path, link: &Path) {
    std::os::windows::fs::symlink_file(target, link)
        .unwrap_or_else(|e| panic!("symlink {}: {e}", link.display()));
}

/// Read the tree under `root` without following symlinks.
///
/// Absolute link targets inside the parent of `root` are shown relative to
/// the link's directory; anything else is shown as-is.
pub fn read_tree(root: &Path) -> Tree {
    read_dir_tree(root, root.parent().unwrap_or(root))
}

fn read_dir_tree(root: &Path, anchor: &Path) -> Tree {
    let entries =
        fs::read_dir(root).unwrap_or_else(|e| panic!("read dir {}: {e}", root.display()));

    let mut tree = Tree::new();
    for entry in entries {
        let entry = entry.unwrap_or_else(|e| panic!("read dir {}: {e}", root.display()));
        let path = entry.path();
        let file_type = entry
            .file_type()
            .unwrap_or_else(|e| panic!("stat {}: {e}", path.display()));

        let node = if file_type.is_symlink() {
            let target =
                fs::read_link(&path).unwrap_or_else(|e| panic!("readlink {}: {e}", path.display()));
            let shown = if target.starts_with(anchor) {
                relative_to(&target, root).unwrap_or(target)
            } else {
                target
            };
            Node::Symlink(shown.to_string_lossy().replace('\\', "/"))
        } else if file_type.is_dir() {
            Node::Dir(read_dir_tree(&path, anchor))
        } else {
            let bytes = fs::read(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
            Node::File(String::from_utf8_lossy(&bytes).into_owned())
        };

        tree.insert(entry.file_name().to_string_lossy().into_owned(), node);
    }
    tree
}

/// Serialize the tree under `root` to YAML.
pub fn to_yaml(root: &Path) -> String {
    render(&read_tree(root))
}

/// Assert that the tree under `root` matches `expected_yaml`.
///
/// # Panics
/// Panics with a line diff of both trees rendered as YAML on mismatch.
pub fn assert_tree(root: &Path, expected_yaml: &str) {
    let expected = render(&parse_yaml(expected_yaml));
    let actual = to_yaml(root);
    assert_eq!(expected, actual, "tree mismatch under {}", root.display());
}

fn render(tree: &Tree) -> String {
    if tree.is_empty() {
        return "{}\n".to_string();
    }
    serde_yaml::to_string(&tree_value(tree)).unwrap_or_else(|e| panic!("render tree: {e}"))
}

fn tree_value(tree: &Tree) -> Value {
    let mut mapping = Mapping::new();
    for (name, node) in tree {
        let value = match node {
            Node::File(content) => leaf("file", "content", content),
            Node::Symlink(target) => leaf("symlink", "target", target),
            Node::Dir(children) if children.is_empty() => Value::Null,
            Node::Dir(children) => tree_value(children),
        };
        mapping.insert(Value::String(name.clone()), value);
    }
    Value::Mapping(mapping)
}

fn leaf(kind: &str, key: &str, value: &str) -> Value {
    let mut mapping = Mapping::new();
    mapping.insert("type".into(), kind.into());
    mapping.insert(key.into(), value.into());
    Value::Mapping(mapping)
}

/// Express absolute `target` relative to absolute `base`.
fn relative_to(target: &Path, base: &Path) -> Option<PathBuf> {
    if !target.is_absolute() || !base.is_absolute() {
        return None;
    }

    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();
    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base.len() {
        out.push("..");
    }
    for component in &target[common..] {
        out.push(component.as_os_str());
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    Some(out)
}
