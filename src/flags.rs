//! File-based boolean flags
//!
//! A [`Flag`] is a boolean variable whose value is the existence of its
//! backing path. Flags are a lightweight way to share state between tools
//! and technologies that can all check for a file.

use std::io;
use std::path::{Path, PathBuf};

use crate::fs::paths;

/// Hands out named flags backed by files under one directory.
#[derive(Debug, Clone)]
pub struct FlagStore {
    dir: PathBuf,
}

impl FlagStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the flag backed by `<dir>/<name>`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn flag(&self, name: &str) -> Flag {
        assert!(!name.is_empty(), "flag name must not be empty");

        Flag::new(self.dir.join(name))
    }
}

/// A boolean variable that is active iff its backing path exists.
#[derive(Debug, Clone)]
pub struct Flag {
    path: PathBuf,
}

impl Flag {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current value of the flag.
    pub fn is_active(&self) -> bool {
        self.path.exists()
    }

    /// Sets the flag by touching its backing file, creating intermediate
    /// directories as needed.
    pub fn activate(&self) -> io::Result<()> {
        paths::touch(&self.path)
    }

    /// Clears the flag, returning whether the backing file was removed.
    pub fn deactivate(&self) -> bool {
        paths::safe_remove(&self.path)
    }

    /// Toggles the flag.
    pub fn flip(&self) -> io::Result<()> {
        if self.is_active() {
            self.deactivate();
            Ok(())
        } else {
            self.activate()
        }
    }
}
