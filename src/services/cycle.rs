//! Cycle service
//!
//! Service face of the cycle accountant: resolves the current salary cycle
//! from the stored settings and measures spending against the monthly budget.
//! The arithmetic itself lives in `models::cycle` and is pure; this layer
//! only feeds it repository contents.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::PaycycleResult;
use crate::models::{compute_remaining, CycleWindow, Money};
use crate::storage::Storage;

/// Computed state of the cycle containing a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStatus {
    /// The resolved window
    pub window: CycleWindow,
    /// Configured budget per cycle
    pub budget: Money,
    /// Sum of expenses dated inside the window
    pub spent: Money,
    /// Budget minus spent; negative when overspent
    pub remaining: Money,
    /// Number of expenses inside the window
    pub expense_count: usize,
    /// Days from the reference date until the cycle ends
    pub days_left: i64,
}

/// Service for cycle window and budget status queries
pub struct CycleService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> CycleService<'a> {
    /// Create a new cycle service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Resolve the cycle window containing `reference`
    pub fn window(&self, reference: NaiveDate) -> CycleWindow {
        CycleWindow::resolve(self.settings.payday, reference)
    }

    /// Compute the full cycle status for the cycle containing `reference`
    pub fn status(&self, reference: NaiveDate) -> PaycycleResult<CycleStatus> {
        let expenses = self.storage.expenses.get_all()?;

        let pairs: Vec<(Money, NaiveDate)> =
            expenses.iter().map(|e| (e.amount, e.date)).collect();

        let spend = compute_remaining(
            self.settings.payday,
            self.settings.monthly_budget,
            &pairs,
            reference,
        );

        let expense_count = expenses
            .iter()
            .filter(|e| spend.window.contains(e.date))
            .count();

        Ok(CycleStatus {
            window: spend.window,
            budget: self.settings.monthly_budget,
            spent: spend.spent,
            remaining: spend.remaining,
            expense_count,
            days_left: spend.window.days_left(reference),
        })
    }
}
