//! Storage initialization
//!
//! Handles first-run setup and empty data file creation

use serde_json::json;

use crate::config::paths::PaycyclePaths;
use crate::error::PaycycleError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and an empty expenses file so that the
/// first `expense list` works without special-casing a missing store.
pub fn initialize_storage(paths: &PaycyclePaths) -> Result<(), PaycycleError> {
    // Ensure all directories exist
    paths.ensure_directories()?;

    if !paths.expenses_file().exists() {
        write_json_atomic(paths.expenses_file(), &json!({ "expenses": [] }))?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &PaycyclePaths) -> bool {
    !paths.expenses_file().exists()
}
