//! Expense record model
//!
//! An expense is a single dated spend with an amount, a category from the
//! fixed set, and a free-text description.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Maximum length of an expense description
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// A single recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category from the fixed set
    pub category: Category,

    /// Calendar date of the spend (no time component)
    pub date: NaiveDate,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(amount: Money, category: Category, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            date,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new expense with a description
    pub fn with_description(
        amount: Money,
        category: Category,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(amount, category, date);
        expense.description = description.into();
        expense
    }

    /// Set the amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Set the category
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.updated_at = Utc::now();
    }

    /// Set the date
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.updated_at = Utc::now();
    }

    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::AmountNotPositive(self.amount));
        }

        if self.description.len() > MAX_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooLong(
                self.description.len(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    AmountNotPositive(Money),
    DescriptionTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountNotPositive(amount) => {
                write!(f, "Expense amount must be positive (got {})", amount)
            }
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description too long ({} chars, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
