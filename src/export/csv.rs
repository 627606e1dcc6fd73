//! CSV Export functionality
//!
//! Exports expense rows to CSV, optionally bounded to a date range.

use crate::error::PaycycleResult;
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::Storage;
use chrono::NaiveDate;
use std::io::Write;

/// Export expenses to CSV
///
/// `from`/`to` bound the exported rows (inclusive); `None` means unbounded.
pub fn export_expenses_csv<W: Write>(
    storage: &Storage,
    writer: &mut W,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> PaycycleResult<()> {
    let service = ExpenseService::new(storage);

    let mut filter = ExpenseFilter::new();
    filter.from = from;
    filter.to = to;
    let expenses = service.list(filter)?;

    writeln!(writer, "ID,Amount,Category,Date,Description")
        .map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{},{}",
            expense.id,
            expense.amount.to_decimal_string(),
            expense.category,
            expense.date,
            escape_csv(&expense.description)
        )
        .map_err(|e| crate::error::PaycycleError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PaycyclePaths;
    use crate::models::{Category, Expense, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_expenses_csv() {
        let (_temp_dir, storage) = create_test_storage();

        storage
            .expenses
            .upsert(Expense::with_description(
                Money::from_cents(5000),
                Category::Food,
                date(2024, 1, 20),
                "weekly groceries",
            ))
            .unwrap();

        let mut output = Vec::new();
        export_expenses_csv(&storage, &mut output, None, None).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.starts_with("ID,Amount,Category,Date,Description\n"));
        assert!(csv.contains("50.00,Food,2024-01-20,weekly groceries"));
    }

    #[test]
    fn test_export_respects_date_range() {
        let (_temp_dir, storage) = create_test_storage();

        for day in [date(2024, 1, 10), date(2024, 2, 10)] {
            storage
                .expenses
                .upsert(Expense::new(Money::from_cents(1000), Category::Other, day))
                .unwrap();
        }

        let mut output = Vec::new();
        export_expenses_csv(&storage, &mut output, Some(date(2024, 2, 1)), None).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.contains("2024-02-10"));
        assert!(!csv.contains("2024-01-10"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
