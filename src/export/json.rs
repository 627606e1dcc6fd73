//! JSON Export functionality
//!
//! Exports the complete store to JSON format with schema versioning.

use crate::config::settings::Settings;
use crate::error::PaycycleResult;
use crate::models::Expense;
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full store export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// User settings (payday, budget, currency)
    pub settings: Settings,

    /// All expenses
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    /// Date of the earliest expense
    pub earliest_expense: Option<String>,

    /// Date of the latest expense
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage, settings: &Settings) -> PaycycleResult<Self> {
        let expenses = storage.expenses.get_all()?;

        let earliest_expense = expenses.iter().map(|e| e.date).min().map(|d| d.to_string());
        let latest_expense = expenses.iter().map(|e| e.date).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            earliest_expense,
            latest_expense,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: settings.clone(),
            expenses,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for expense in &self.expenses {
            expense
                .validate()
                .map_err(|e| format!("Expense {}: {}", expense.id, e))?;
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata count mismatch: metadata says {}, export has {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        Ok(())
    }
}

/// Export the full store to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> PaycycleResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;

    Ok(())
}
