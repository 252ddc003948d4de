//! Maven artifact coordinates

use std::path::PathBuf;

use thiserror::Error;

use crate::version::Version;

/// Errors raised by artifact operations that need full POM coordinates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MavenError {
    #[error("artifact id and version are required for this operation")]
    IncompleteCoordinates,
}

/// A Maven artifact, identified by its common POM attributes.
///
/// Only the group id is mandatory; path-related operations degrade
/// gracefully when the artifact id or version is absent.
#[derive(Debug, Clone)]
pub struct MavenArtifact {
    group_id: String,
    artifact_id: Option<String>,
    version: Option<Version>,
    description: Option<String>,
    scope: Option<String>,
}

impl MavenArtifact {
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: None,
            version: None,
            description: None,
            scope: None,
        }
    }

    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Returns the basename of the artifact's file per Maven conventions:
    ///
    /// `<artifactId>-<version>[-<suffix>][.<extension>]`
    ///
    /// Leading `-` on the suffix and leading `.` on the extension are
    /// tolerated. Requires the artifact id and version.
    pub fn file_name(
        &self,
        suffix: Option<&str>,
        extension: Option<&str>,
    ) -> Result<String, MavenError> {
        let artifact_id = self
            .artifact_id
            .as_deref()
            .ok_or(MavenError::IncompleteCoordinates)?;
        let version = self
            .version
            .as_ref()
            .ok_or(MavenError::IncompleteCoordinates)?;

        Ok(conventional_file_name(
            artifact_id,
            version,
            suffix,
            extension,
        ))
    }

    /// Returns the artifact's path relative to a repository root: the group
    /// id with dots turned into path separators, then the artifact id,
    /// version and file name, each appended only when the corresponding
    /// attributes are present.
    pub fn relative_path(&self, suffix: Option<&str>, extension: Option<&str>) -> PathBuf {
        let mut path: PathBuf = self.group_id.split('.').collect();

        if let Some(artifact_id) = &self.artifact_id {
            path.push(artifact_id);

            if let Some(version) = &self.version {
                path.push(version.raw_str());
                path.push(conventional_file_name(
                    artifact_id,
                    version,
                    suffix,
                    extension,
                ));
            }
        }

        path
    }

    /// The `groupId:artifactId:version` form. Requires full coordinates.
    pub fn coordinates(&self) -> Result<String, MavenError> {
        match (&self.artifact_id, &self.version) {
            (Some(artifact_id), Some(version)) => Ok(format!(
                "{}:{artifact_id}:{}",
                self.group_id,
                version.raw_str()
            )),
            _ => Err(MavenError::IncompleteCoordinates),
        }
    }
}

fn conventional_file_name(
    artifact_id: &str,
    version: &Version,
    suffix: Option<&str>,
    extension: Option<&str>,
) -> String {
    let mut result = format!("{artifact_id}-{}", version.raw_str());

    if let Some(suffix) = suffix {
        result.push('-');
        result.push_str(suffix.trim_start_matches('-'));
    }

    if let Some(extension) = extension {
        result.push('.');
        result.push_str(extension.trim_start_matches('.'));
    }

    result
}
