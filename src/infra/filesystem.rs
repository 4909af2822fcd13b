//! Filesystem operations
//!
//! Handles file and directory operations.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write content to a file only if it does not exist yet
///
/// Returns `true` when the file was created, `false` when it was already there.
pub fn write_new_file(path: &Path, content: &str) -> Result<bool, FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let write_err = |e: std::io::Error| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes()).map_err(write_err)?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(write_err(e)),
    }
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("file.yaml");

        assert!(write_new_file(&path, "first").unwrap());
        assert!(!write_new_file(&path, "second").unwrap());
        assert_eq!(read_file(&path).unwrap(), "first");
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_file(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, FilesystemError::ReadFile { .. }));
    }

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b");
        create_dir_all(&path).unwrap();
        create_dir_all(&path).unwrap();
        assert!(path.is_dir());
    }
}
