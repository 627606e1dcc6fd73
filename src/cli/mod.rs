//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

use chrono::NaiveDate;

use crate::error::{PaycycleError, PaycycleResult};
use crate::models::Category;

pub mod budget;
pub mod expense;
pub mod export;
pub mod history;
pub mod report;
pub mod status;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use history::{handle_history_command, HistoryArgs};
pub use report::{handle_report_command, ReportCommands};
pub use status::{handle_status_command, StatusArgs};

/// Parse a user-supplied YYYY-MM-DD date
pub(crate) fn parse_date(s: &str) -> PaycycleResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        PaycycleError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s))
    })
}

/// Parse a user-supplied category name, listing the valid set on failure
pub(crate) fn parse_category(s: &str) -> PaycycleResult<Category> {
    s.parse().map_err(|_| {
        let valid = Category::all()
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        PaycycleError::Validation(format!("Unknown category '{}': expected one of {}", s, valid))
    })
}
