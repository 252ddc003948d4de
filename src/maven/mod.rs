//! Maven repository path conventions
//!
//! [`MavenArtifact`] models an artifact's POM coordinates and derives its
//! conventional file name and repository-relative path. [`MavenRepository`]
//! joins those paths under a local repository root and looks up the latest
//! published version of an artifact through a
//! [`VersionDirectory`](crate::version::VersionDirectory).

pub mod artifact;
pub mod repository;

pub use artifact::{MavenArtifact, MavenError};
pub use repository::MavenRepository;

/// The extension Maven assumes when none is given.
pub const DEFAULT_EXTENSION: &str = "jar";
