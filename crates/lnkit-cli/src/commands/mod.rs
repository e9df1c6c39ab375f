//! Command implementations for lnkit-cli

pub mod link;
pub mod stats;
pub mod unlink;

pub use link::run_link;
pub use stats::run_stats;
pub use unlink::run_unlink;
