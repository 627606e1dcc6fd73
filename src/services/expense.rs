//! Expense service
//!
//! Provides business logic for expense management: CRUD operations with
//! validation, list filtering and sorting, and audit logging of every
//! mutation.

use chrono::{Local, NaiveDate};

use crate::audit::{generate_diff, EntityType};
use crate::error::{PaycycleError, PaycycleResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Sort key for expense listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Category,
}

/// Sort direction for expense listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Options for filtering and ordering expense listings
///
/// Date bounds are inclusive on both ends; this is the filter the user
/// types into, not the half-open cycle window.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by category
    pub category: Option<Category>,
    /// Keep expenses dated on or after this day
    pub from: Option<NaiveDate>,
    /// Keep expenses dated on or before this day
    pub to: Option<NaiveDate>,
    /// Sort key (default: date)
    pub sort: SortKey,
    /// Sort direction (default: descending, newest first)
    pub direction: SortDirection,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Keep expenses dated on or after `from`
    pub fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Keep expenses dated on or before `to`
    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Sort by the given key
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the sort direction
    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub category: Category,
    /// Defaults to today when not given
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Input for updating an expense; `None` fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new expense
    pub fn create(&self, input: CreateExpenseInput) -> PaycycleResult<Expense> {
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        let mut expense = Expense::new(input.amount, input.category, date);
        if let Some(description) = input.description {
            expense.description = description.trim().to_string();
        }

        expense
            .validate()
            .map_err(|e| PaycycleError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.to_string()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Look up an expense by a user-supplied identifier
    ///
    /// Accepts the full UUID, the `exp-` prefixed short form, or the bare
    /// 8-char fragment.
    pub fn get(&self, identifier: &str) -> PaycycleResult<Expense> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            if let Some(expense) = self.storage.expenses.get(id)? {
                return Ok(expense);
            }
        }

        // Short forms can't be parsed into a UUID; scan for a match
        let matches: Vec<Expense> = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| e.id.matches(identifier))
            .collect();

        match matches.len() {
            0 => Err(PaycycleError::expense_not_found(identifier)),
            1 => Ok(matches.into_iter().next().unwrap()),
            _ => Err(PaycycleError::Validation(format!(
                "Identifier '{}' matches more than one expense",
                identifier
            ))),
        }
    }

    /// List expenses with filtering and ordering
    pub fn list(&self, filter: ExpenseFilter) -> PaycycleResult<Vec<Expense>> {
        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            if from > to {
                return Err(PaycycleError::Validation(format!(
                    "Invalid date range: {} is after {}",
                    from, to
                )));
            }
        }

        let mut expenses = if let Some(category) = filter.category {
            self.storage.expenses.find_by_category(category)?
        } else {
            self.storage.expenses.get_all()?
        };

        if let Some(from) = filter.from {
            expenses.retain(|e| e.date >= from);
        }
        if let Some(to) = filter.to {
            expenses.retain(|e| e.date <= to);
        }

        // Repository order is already date desc, newest insert first; re-sort
        // for the other keys and directions
        match (filter.sort, filter.direction) {
            (SortKey::Date, SortDirection::Desc) => {}
            (SortKey::Date, SortDirection::Asc) => {
                expenses.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
            }
            (SortKey::Amount, SortDirection::Asc) => {
                expenses.sort_by(|a, b| a.amount.cmp(&b.amount));
            }
            (SortKey::Amount, SortDirection::Desc) => {
                expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
            }
            (SortKey::Category, SortDirection::Asc) => {
                expenses.sort_by(|a, b| a.category.name().cmp(b.category.name()));
            }
            (SortKey::Category, SortDirection::Desc) => {
                expenses.sort_by(|a, b| b.category.name().cmp(a.category.name()));
            }
        }

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        Ok(expenses)
    }

    /// Update an expense
    pub fn update(&self, identifier: &str, input: UpdateExpenseInput) -> PaycycleResult<Expense> {
        let mut expense = self.get(identifier)?;
        let before = expense.clone();

        if let Some(amount) = input.amount {
            expense.set_amount(amount);
        }
        if let Some(category) = input.category {
            expense.set_category(category);
        }
        if let Some(date) = input.date {
            expense.set_date(date);
        }
        if let Some(description) = input.description {
            expense.set_description(description.trim());
        }

        expense
            .validate()
            .map_err(|e| PaycycleError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        let diff = match (
            serde_json::to_value(&before),
            serde_json::to_value(&expense),
        ) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.to_string()),
            &before,
            &expense,
            diff,
        )?;

        Ok(expense)
    }

    /// Delete an expense
    pub fn delete(&self, identifier: &str) -> PaycycleResult<Expense> {
        let expense = self.get(identifier)?;

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.to_string()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Count expenses
    pub fn count(&self) -> PaycycleResult<usize> {
        self.storage.expenses.count()
    }
}
