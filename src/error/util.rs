//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient
//! at the input boundaries of the pipeline.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, TriageError};

/// Safely open a file with rich error information
///
/// This function attempts to open a file and provides detailed
/// error information if the operation fails.
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(TriageError::InputError(format!(
            "File not found: {} (needed for: {purpose})",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(TriageError::InputError(format!(
            "Path is not a file: {} (expected a file for: {purpose})",
            path.display()
        )));
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {} ({purpose})", path.display())
                }
                io::ErrorKind::NotFound => format!(
                    "File not found, it may have been deleted during operation: {}",
                    path.display()
                ),
                _ => format!("Failed to open file: {} ({purpose})", path.display()),
            };

            Err(TriageError::InputError(format!("{context}: {e}")))
        }
    }
}

/// Check that the parent directory of an output path exists, creating it if needed
pub fn ensure_parent_dir(path: &Path, purpose: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                TriageError::InputError(format!(
                    "Failed to create output directory {} ({purpose}): {e}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}
