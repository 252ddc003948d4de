//! General-purpose utilities.
//!
//! # Modules
//!
//! - [`version`]: dotted numeric versions and version-named directories
//! - [`ioc`]: a minimal inversion-of-control container
//! - [`maven`]: Maven repository path conventions
//! - [`fs`]: file-tree processing and path helpers
//! - [`flags`]: file-based boolean flags
//! - [`render`]: a rendering model and template view

pub mod flags;
pub mod fs;
pub mod ioc;
pub mod maven;
pub mod render;
pub mod version;
