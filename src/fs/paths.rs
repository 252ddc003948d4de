//! Best-effort path helpers
//!
//! Variants of common filesystem operations that report success as a
//! boolean instead of propagating I/O errors, for callers that only care
//! about the outcome.

use std::fs;
use std::io;
use std::path::Path;

/// Creates a directory and any missing parents, returning whether the
/// directory exists afterwards.
pub fn safe_make_dirs(path: impl AsRef<Path>) -> bool {
    fs::create_dir_all(path).is_ok()
}

/// Removes a file, returning whether it was actually removed.
pub fn safe_remove(path: impl AsRef<Path>) -> bool {
    fs::remove_file(path).is_ok()
}

/// Deletes a directory tree, returning whether it no longer exists
/// afterwards.
pub fn safe_rm_tree(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let _ = fs::remove_dir_all(path);

    !path.exists()
}

/// Creates an empty file, creating intermediate directories as needed.
/// An existing file is truncated.
pub fn touch(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::File::create(path).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn safe_make_dirs_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        assert!(safe_make_dirs(&nested));
        assert!(nested.is_dir());
        // Repeating the call is harmless.
        assert!(safe_make_dirs(&nested));
    }

    #[test]
    fn safe_remove_reports_whether_a_file_was_removed() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("victim");
        touch(&file).unwrap();

        assert!(safe_remove(&file));
        assert!(!file.exists());
        assert!(!safe_remove(&file));
    }

    #[test]
    fn touch_creates_the_file_and_its_parents() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("deep").join("nested").join("flag");

        touch(&file).unwrap();

        assert!(file.is_file());
    }

    #[test]
    fn safe_rm_tree_deletes_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("tree");
        touch(root.join("a").join("b")).unwrap();

        assert!(safe_rm_tree(&root));
        assert!(!root.exists());
        // A missing tree already satisfies the postcondition.
        assert!(safe_rm_tree(&root));
    }
}
