//! Configuration for lnkit
//!
//! A config file (default `lnkit.toml`) has an `[options]` table and an
//! optional `[exceptions]` table:
//!
//! ```toml
//! [options]
//! confirm = true
//! force = false
//! create_dirs = true
//! source_dir = "."
//! target_dir = "~"
//! ignore = ["lnkit.toml", ".lnkitignore", "*.git"]
//! log_level = "info"
//!
//! [exceptions]
//! "nvim" = "~/.config/nvim"
//! ```
//!
//! Every key is optional. `.json` and `.yaml` files with the same shape are
//! also accepted.
//!
//! Extra ignore patterns can be listed one per line in a `.lnkitignore`
//! file in the source directory.

mod loader;
mod manifest;

pub use loader::{ConfigSource, IGNORE_FILE, LoadedConfig};
pub use manifest::{Config, Options};
