//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PaycycleError;
use crate::models::{Category, Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence with indexing
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: category -> expense_ids
    by_category: RwLock<HashMap<Category, Vec<ExpenseId>>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and build indexes
    pub fn load(&self) -> Result<(), PaycycleError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_category = self.by_category.write().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_category.clear();

        for expense in file_data.expenses {
            by_category.entry(expense.category).or_default().push(expense.id);
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    ///
    /// Records are written newest-first (date, then creation time) so the
    /// file reads in the same order lists are presented.
    pub fn save(&self) -> Result<(), PaycycleError> {
        let data = self.data.read().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, PaycycleError> {
        let data = self.data.read().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, PaycycleError> {
        let data = self.data.read().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(expenses)
    }

    /// Get expenses in a category, newest first
    pub fn find_by_category(&self, category: Category) -> Result<Vec<Expense>, PaycycleError> {
        let data = self.data.read().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_category = self.by_category.read().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_category.get(&category).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut expenses: Vec<_> = ids
            .iter()
            .filter_map(|id| data.get(id).cloned())
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), PaycycleError> {
        let mut data = self.data.write().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_category = self.by_category.write().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        // Remove from the old index entry if updating
        if let Some(old) = data.get(&expense.id) {
            if let Some(ids) = by_category.get_mut(&old.category) {
                ids.retain(|&id| id != expense.id);
            }
        }

        by_category.entry(expense.category).or_default().push(expense.id);
        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<bool, PaycycleError> {
        let mut data = self.data.write().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_category = self.by_category.write().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(expense) = data.remove(&id) {
            if let Some(ids) = by_category.get_mut(&expense.category) {
                ids.retain(|&eid| eid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, PaycycleError> {
        let data = self.data.read().map_err(|e| {
            PaycycleError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
