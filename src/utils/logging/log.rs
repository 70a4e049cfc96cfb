//! Logging utilities
//!
//! Standardized logging functions for input loading operations.

use std::path::Path;
use std::time::Duration;

/// Log the start of an input loading operation with consistent format
///
/// # Arguments
/// * `what` - What is being loaded ("symptom mapping", "report corpus")
/// * `path` - Path of the file being read
pub fn log_load_start(what: &str, path: &Path) {
    log::info!("Loading {} from {}", what, path.display());
}

/// Log the completion of an input loading operation with consistent format
///
/// # Arguments
/// * `what` - What was loaded
/// * `path` - Path of the file that was read
/// * `items` - Number of items loaded
/// * `elapsed` - Elapsed loading time
pub fn log_load_complete(what: &str, path: &Path, items: usize, elapsed: Duration) {
    log::info!(
        "Loaded {} {} from {} in {:?}",
        items,
        what,
        path.display(),
        elapsed
    );
}

/// Log a recoverable per-record anomaly with consistent format
pub fn log_record_warning(id: usize, message: &str) {
    log::warn!("Record {id}: {message}");
}
