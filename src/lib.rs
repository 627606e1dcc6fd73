//! paycycle - Payday-anchored expense tracking from the terminal
//!
//! This library provides the core functionality for the paycycle expense
//! tracker. Spending is measured against salary cycles: half-open windows
//! that start on a configured payday each month, so "how much is left"
//! always refers to the money between two paychecks rather than a calendar
//! month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, cycle windows)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal output formatting
//! - `reports`: Aggregated text reports
//! - `export`: CSV/JSON/YAML export
//!
//! # Example
//!
//! ```rust,ignore
//! use paycycle::config::{paths::PaycyclePaths, settings::Settings};
//!
//! let paths = PaycyclePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PaycycleError, PaycycleResult};
