//! Filesystem utilities
//!
//! # Modules
//!
//! - [`tree`]: recursive walker applying pluggable actions to matching files
//! - [`actions`]: concrete per-file actions (header and trailing-space removal)
//! - [`paths`]: best-effort path helpers

pub mod actions;
pub mod paths;
pub mod tree;

pub use actions::{HeaderRemover, LineAction, LineFilter, TrailingSpaceRemover};
pub use tree::{FileAction, FileTreeProcessor, TreeError};
