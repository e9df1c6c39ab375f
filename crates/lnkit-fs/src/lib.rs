//! Filesystem primitives for lnkit
//!
//! Provides the link operations, content digests and path helpers that the
//! reconciliation engine in `lnkit-core` is built on.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod link;
pub mod path;

pub use checksum::{
    compute_file_checksum, compute_path_checksum, compute_tree_checksum, contents_equal,
};
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::{read_lines, read_text};
pub use link::{
    EntryKind, create_symlink, entry_kind, path_exists, read_link_absolute, remove_path,
    remove_symlink,
};
pub use path::{absolutize, expand_path, is_descendant, normalize};
