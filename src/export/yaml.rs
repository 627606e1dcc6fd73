//! YAML Export functionality
//!
//! Exports the complete store to YAML format for human-readable backup.

use crate::config::settings::Settings;
use crate::error::PaycycleResult;
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the full store to YAML format
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> PaycycleResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    // Add a header comment
    writeln!(writer, "# paycycle Full Data Export")
        .map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# This file can be used to restore your expense data."
    )
    .map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;

    // Serialize to YAML
    serde_yaml::to_writer(writer, &export)
        .map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PaycyclePaths;
    use crate::models::{Category, Expense, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_yaml_export() {
        let (_temp_dir, storage) = create_test_storage();

        storage
            .expenses
            .upsert(Expense::with_description(
                Money::from_cents(5000),
                Category::Food,
                NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
                "weekly groceries",
            ))
            .unwrap();

        let mut yaml_output = Vec::new();
        export_full_yaml(&storage, &Settings::default(), &mut yaml_output).unwrap();

        let yaml_string = String::from_utf8(yaml_output).unwrap();

        assert!(yaml_string.contains("# paycycle Full Data Export"));
        assert!(yaml_string.contains("weekly groceries"));
        assert!(yaml_string.contains("Food"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();

        storage
            .expenses
            .upsert(Expense::new(
                Money::from_cents(1250),
                Category::Transport,
                NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            ))
            .unwrap();

        let mut yaml_output = Vec::new();
        export_full_yaml(&storage, &Settings::default(), &mut yaml_output).unwrap();

        let yaml_string = String::from_utf8(yaml_output).unwrap();

        // Skip the comment lines for parsing
        let yaml_content: String = yaml_string
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: FullExport = serde_yaml::from_str(&yaml_content).unwrap();
        parsed.validate().unwrap();

        assert_eq!(parsed.expenses.len(), 1);
        assert_eq!(parsed.expenses[0].amount, Money::from_cents(1250));
    }
}
