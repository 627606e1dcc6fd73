//! Reports module for paycycle
//!
//! Aggregated views over the expense store, formatted as plain text.

pub mod summary;

pub use summary::SummaryReport;
