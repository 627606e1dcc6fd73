//! Summary Report
//!
//! Totals expenses overall and by category for an optional date range, then
//! appends the current salary-cycle budget position.

use chrono::{DateTime, Local, NaiveDate};

use crate::config::settings::Settings;
use crate::error::PaycycleResult;
use crate::models::{Category, Money};
use crate::services::{CycleService, CycleStatus, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Summary of expenses with a salary-cycle footer
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Inclusive start of the reported period, if bounded
    pub from: Option<NaiveDate>,
    /// Inclusive end of the reported period, if bounded
    pub to: Option<NaiveDate>,
    /// When the report was generated
    pub generated_at: DateTime<Local>,
    /// Total of all matching expenses
    pub total: Money,
    /// Per-category totals, sorted by category name (case-insensitive)
    pub by_category: Vec<(Category, Money)>,
    /// Number of matching expenses
    pub expense_count: usize,
    /// Cycle status for the cycle containing `reference`
    pub cycle: CycleStatus,
}

impl SummaryReport {
    /// Generate a summary report
    ///
    /// `from`/`to` bound the totals section; the cycle footer always reflects
    /// the cycle containing `reference`, independent of the period filter.
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        category: Option<Category>,
        reference: NaiveDate,
    ) -> PaycycleResult<Self> {
        let expense_service = ExpenseService::new(storage);

        let mut filter = ExpenseFilter::new();
        filter.from = from;
        filter.to = to;
        filter.category = category;
        let expenses = expense_service.list(filter)?;

        let total: Money = expenses.iter().map(|e| e.amount).sum();

        let mut by_category: Vec<(Category, Money)> = Category::all()
            .iter()
            .map(|cat| {
                let sum: Money = expenses
                    .iter()
                    .filter(|e| e.category == *cat)
                    .map(|e| e.amount)
                    .sum();
                (*cat, sum)
            })
            .filter(|(_, sum)| !sum.is_zero())
            .collect();
        by_category.sort_by_key(|(cat, _)| cat.name().to_lowercase());

        let cycle = CycleService::new(storage, settings).status(reference)?;

        Ok(Self {
            from,
            to,
            generated_at: Local::now(),
            total,
            by_category,
            expense_count: expenses.len(),
            cycle,
        })
    }

    /// Format the report as plain text
    pub fn format_text(&self) -> String {
        let mut output = String::new();

        output.push_str("Expense Report\n");
        output.push_str("=================\n");

        if self.from.is_some() || self.to.is_some() {
            let from = self
                .from
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-∞".to_string());
            let to = self
                .to
                .map(|d| d.to_string())
                .unwrap_or_else(|| "+∞".to_string());
            output.push_str(&format!("Period: {} .. {}\n", from, to));
        }

        output.push_str(&format!(
            "Generated at: {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        output.push_str(&format!(
            "Total expenses: {}\n\n",
            self.total.to_decimal_string()
        ));

        output.push_str("By category:\n");
        for (category, amount) in &self.by_category {
            output.push_str(&format!(
                "  - {}: {}\n",
                category.name(),
                amount.to_decimal_string()
            ));
        }
        output.push('\n');

        output.push_str(&format!(
            "Current salary cycle: {} → {} (end exclusive)\n",
            self.cycle.window.start, self.cycle.window.end
        ));
        output.push_str(&format!(
            "Spent in cycle: {}\n",
            self.cycle.spent.to_decimal_string()
        ));
        output.push_str(&format!(
            "Remaining in cycle: {}\n",
            self.cycle.remaining.to_decimal_string()
        ));

        output
    }
}
