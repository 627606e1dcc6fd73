//! Export module for paycycle
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: For expense rows (spreadsheet-compatible)
//! - JSON: For machine-readable full data export
//! - YAML: For human-readable full data export

use std::path::{Path, PathBuf};

use chrono::Local;

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

/// Default file name for an export, e.g. `expenses_report_20240210.csv`
pub fn default_export_filename(extension: &str) -> String {
    format!(
        "expenses_report_{}.{}",
        Local::now().format("%Y%m%d"),
        extension
    )
}

/// Resolve a user-supplied output path for an export
///
/// A path naming an existing directory gets the default file name appended;
/// anything else is used as-is.
pub fn resolve_output_path(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() {
        output.join(default_export_filename(extension))
    } else {
        output.to_path_buf()
    }
}
