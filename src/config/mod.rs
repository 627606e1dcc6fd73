//! Configuration module for paycycle
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (payday and monthly budget)

pub mod paths;
pub mod settings;

pub use paths::PaycyclePaths;
pub use settings::Settings;
