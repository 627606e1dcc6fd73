//! Service layer for paycycle
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation, list filtering and ordering, cycle status computation,
//! and audit logging of every mutation.

pub mod cycle;
pub mod expense;

pub use cycle::{CycleService, CycleStatus};
pub use expense::{
    CreateExpenseInput, ExpenseFilter, ExpenseService, SortDirection, SortKey, UpdateExpenseInput,
};
