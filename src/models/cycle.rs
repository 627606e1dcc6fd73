//! Salary-cycle window representation
//!
//! A cycle runs from one payday to the next. Given the configured day-of-month
//! and a reference date, the window is the half-open interval [start, end)
//! containing the reference: a record dated exactly on `end` belongs to the
//! next cycle.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

use super::money::Money;

/// A payday-to-payday spending cycle
///
/// Derived from settings on demand, never persisted. Spans one calendar
/// month's worth of payday-to-payday distance (28 to 31 days depending on the
/// month boundaries crossed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleWindow {
    /// First day of the cycle (the payday)
    pub start: NaiveDate,

    /// First day of the next cycle (exclusive bound)
    pub end: NaiveDate,
}

impl CycleWindow {
    /// Resolve the cycle containing `reference` for the given payday
    ///
    /// The payday is normalized into each month: if the month is shorter than
    /// the configured day, the last day of the month is used (payday 31 in
    /// February lands on the 28th or 29th). Paydays outside 1-31 are clamped
    /// rather than rejected, so a stored configuration always yields a window.
    pub fn resolve(payday: u32, reference: NaiveDate) -> Self {
        let payday = payday.clamp(1, 31);

        let p_cur = normalized_payday(reference.year(), reference.month(), payday);

        if reference >= p_cur {
            // Cycle started this month, runs to next month's payday
            let (year, month) = next_month(reference.year(), reference.month());
            Self {
                start: p_cur,
                end: normalized_payday(year, month, payday),
            }
        } else {
            // Still inside the cycle that started last month
            let (year, month) = prev_month(reference.year(), reference.month());
            Self {
                start: normalized_payday(year, month, payday),
                end: p_cur,
            }
        }
    }

    /// Check if a date falls within this cycle (end is exclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Total number of days in the cycle
    pub fn days_total(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Days from `today` until the cycle ends, clamped at zero
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.end - today).num_days().max(0)
    }
}

impl fmt::Display for CycleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Spend and remaining budget computed for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSpend {
    /// The resolved window
    pub window: CycleWindow,

    /// Sum of expense amounts dated inside the window
    pub spent: Money,

    /// Budget minus spent; negative when the cycle is overspent
    pub remaining: Money,
}

/// Compute spend and remaining budget for the cycle containing `reference`
///
/// Pure function over caller-supplied data: filters `expenses` to those dated
/// inside the resolved window and sums their amounts. An empty sequence yields
/// a spent total of exactly zero. The remaining amount is not clamped; a
/// negative value signals overspending.
pub fn compute_remaining(
    payday: u32,
    monthly_budget: Money,
    expenses: &[(Money, NaiveDate)],
    reference: NaiveDate,
) -> CycleSpend {
    let window = CycleWindow::resolve(payday, reference);

    let spent: Money = expenses
        .iter()
        .filter(|(_, date)| window.contains(*date))
        .map(|(amount, _)| *amount)
        .sum();

    CycleSpend {
        window,
        spent,
        remaining: monthly_budget - spent,
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first| (first - Duration::days(1)).day())
        .unwrap_or(28)
}

/// The payday date within a given month, clamped to the month's length
fn normalized_payday(year: i32, month: u32, payday: u32) -> NaiveDate {
    let day = payday.min(last_day_of_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}
