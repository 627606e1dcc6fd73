//! Display formatting for terminal output
//!
//! String-building formatters used by the CLI handlers. These never print;
//! they return strings so the handlers own all terminal output.

pub mod cycle;
pub mod expense;

pub use cycle::format_cycle_status;
pub use expense::{format_expense_details, format_expense_list, format_expense_row};
