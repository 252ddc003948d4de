//! Local Maven repository lookups

use std::io;
use std::path::{Path, PathBuf};

use crate::version::{Version, VersionDirectory};

use super::artifact::MavenArtifact;

/// A Maven repository rooted at a local directory.
#[derive(Debug, Clone)]
pub struct MavenRepository {
    root: PathBuf,
}

impl MavenRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins the repository root with the artifact's relative path.
    pub fn artifact_path(
        &self,
        artifact: &MavenArtifact,
        suffix: Option<&str>,
        extension: Option<&str>,
    ) -> PathBuf {
        self.root.join(artifact.relative_path(suffix, extension))
    }

    /// Returns the latest version published under the given coordinates,
    /// or `None` if the artifact has no version entries (including when its
    /// directory does not exist at all).
    pub fn latest_artifact_version(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> io::Result<Option<Version>> {
        let artifact = MavenArtifact::new(group_id).with_artifact_id(artifact_id);

        VersionDirectory::new(self.artifact_path(&artifact, None, None)).latest_version()
    }
}
