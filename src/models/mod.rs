//! Core data models for paycycle
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expense records, categories, money amounts, and the
//! derived salary-cycle window.

pub mod category;
pub mod cycle;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::Category;
pub use cycle::{compute_remaining, CycleSpend, CycleWindow};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
