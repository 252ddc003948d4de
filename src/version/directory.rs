//! Scanning directory entry names for versions

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::version::Version;

/// A directory whose entry names, not necessarily all of them, are version
/// strings. Files and subdirectories are both candidates.
#[derive(Debug, Clone)]
pub struct VersionDirectory {
    path: PathBuf,
}

impl VersionDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the versions parsed from the directory's entry names, in
    /// listing order. Entries whose names do not parse are skipped. A
    /// missing directory yields an empty list rather than an error.
    pub fn versions(&self) -> io::Result<Vec<Version>> {
        let entries = match std::fs::read_dir(&self.path) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let mut versions = Vec::new();

        for entry in entries {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };

            match Version::parse(name) {
                Ok(version) => versions.push(version),
                Err(err) => trace!(entry = name, %err, "skipping non-version entry"),
            }
        }

        Ok(versions)
    }

    /// Returns the greatest version among the directory's entries, or
    /// `None` if no entry name parses as a version.
    pub fn latest_version(&self) -> io::Result<Option<Version>> {
        let mut versions = self.versions()?;

        // Stable sort: among equal versions the last-listed one wins.
        versions.sort();

        Ok(versions.pop())
    }
}
