//! Recursive file-tree processing
//!
//! [`FileTreeProcessor`] walks every file below a root directory and
//! applies a [`FileAction`] to the ones whose path matches a pattern. An
//! optional pre-processing hook can veto individual files.

use std::path::Path;

use ignore::WalkBuilder;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Errors raised while processing a file tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("root must be a directory: {0}")]
    NotADirectory(String),

    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// An action applied to each matching file in a tree.
pub trait FileAction {
    fn process(&mut self, path: &Path) -> Result<(), TreeError>;
}

/// Applies a [`FileAction`] to every file below a root directory whose
/// path matches the given pattern.
pub struct FileTreeProcessor {
    path_pattern: Regex,
    on_processing: Box<dyn FnMut(&Path) -> bool>,
}

impl FileTreeProcessor {
    /// Creates a processor selecting files whose full path matches
    /// `path_pattern`. The default pre-processing hook logs the path and
    /// accepts every file.
    pub fn new(path_pattern: Regex) -> Self {
        Self {
            path_pattern,
            on_processing: Box::new(|path| {
                debug!(path = %path.display(), "processing file");
                true
            }),
        }
    }

    /// Replaces the pre-processing hook: the action only runs on a file if
    /// the hook returns true for its path.
    pub fn on_processing(mut self, hook: impl FnMut(&Path) -> bool + 'static) -> Self {
        self.on_processing = Box::new(hook);
        self
    }

    /// Walks the tree below `root` and applies `action` to every matching
    /// file. Hidden files are included; no ignore files are honored.
    pub fn apply_to(
        &mut self,
        root: impl AsRef<Path>,
        action: &mut dyn FileAction,
    ) -> Result<(), TreeError> {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(TreeError::NotADirectory(root.display().to_string()));
        }

        for entry in WalkBuilder::new(root).standard_filters(false).build() {
            let entry = entry?;

            if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
                continue;
            }

            let path = entry.path();
            let Some(path_str) = path.to_str() else {
                continue;
            };

            if !self.path_pattern.is_match(path_str) {
                continue;
            }

            if (self.on_processing)(path) {
                action.process(path)?;
            }
        }

        Ok(())
    }
}
