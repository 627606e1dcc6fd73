//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display.

use crate::models::Expense;

/// Format a single expense for display (list row)
pub fn format_expense_row(expense: &Expense) -> String {
    let description = if expense.description.is_empty() {
        "-".to_string()
    } else {
        expense.description.clone()
    };

    format!(
        "{:12} {} {:13} {:>12}  {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.category,
        expense.amount,
        truncate(&description, 30).trim_end()
    )
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:13} {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Amount:      {}\n", expense.amount));
    output.push_str(&format!("Category:    {}\n", expense.category));

    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if expense.updated_at != expense.created_at {
        output.push_str(&format!(
            "Updated:     {}\n",
            expense.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    output
}

/// Truncate a string to a maximum length
///
/// Cuts on a char boundary so multibyte descriptions never split mid-character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let mut cut = max_len - 3;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &s[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn sample_expense() -> Expense {
        Expense::with_description(
            Money::from_cents(5000),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            "groceries",
        )
    }

    #[test]
    fn test_format_expense_row() {
        let formatted = format_expense_row(&sample_expense());
        assert!(formatted.contains("2024-01-20"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("$50.00"));
        assert!(formatted.contains("groceries"));
        assert!(formatted.starts_with("exp-"));
    }

    #[test]
    fn test_format_empty_list() {
        let formatted = format_expense_list(&[]);
        assert!(formatted.contains("No expenses found"));
    }

    #[test]
    fn test_format_list_has_header() {
        let formatted = format_expense_list(&[sample_expense()]);
        assert!(formatted.contains("ID"));
        assert!(formatted.contains("Category"));
        assert!(formatted.contains("Amount"));
    }

    #[test]
    fn test_format_expense_details() {
        let formatted = format_expense_details(&sample_expense());
        assert!(formatted.contains("Date:        2024-01-20"));
        assert!(formatted.contains("Amount:      $50.00"));
        assert!(formatted.contains("Category:    Food"));
        assert!(formatted.contains("Description: groceries"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long description that overflows", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_on_char_boundary() {
        // 'é' straddles the byte where the cut would land
        let description = format!("{}éxxxxxxxx", "a".repeat(26));
        let result = truncate(&description, 30);
        assert!(result.ends_with("..."));
        assert!(!result.contains('é'));

        let mut expense = sample_expense();
        expense.description = description;
        let row = format_expense_row(&expense);
        assert!(row.contains("..."));
    }
}
