//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Safely open a dataset file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(Error::dataset_load(
            path.display().to_string(),
            format!("File not found (needed for: {purpose})"),
        ));
    }

    if !path.is_file() {
        return Err(Error::dataset_load(
            path.display().to_string(),
            format!("Path is not a file (expected a file for: {purpose})"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let reason = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for {purpose}: {e}"),
        };
        Error::dataset_load(path.display().to_string(), reason)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_dataset_error() {
        let err = safe_open_file(Path::new("/definitely/not/here.csv"), "training").unwrap_err();
        assert!(matches!(err, Error::DatasetLoad { .. }));
        assert!(err.to_string().contains("training"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = safe_open_file(dir.path(), "testing").unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }
}
