//! User settings for paycycle
//!
//! Holds the budget configuration: the payday day-of-month that anchors each
//! spending cycle, and the monthly budget measured against it.

use serde::{Deserialize, Serialize};

use super::paths::PaycyclePaths;
use crate::error::PaycycleError;
use crate::models::Money;

/// User settings for paycycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Day of month (1-31) on which a new spending cycle starts
    #[serde(default = "default_payday")]
    pub payday: u32,

    /// Budget available per cycle
    #[serde(default)]
    pub monthly_budget: Money,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_payday() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            payday: default_payday(),
            monthly_budget: Money::zero(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Set the payday, silently clamping to 1-31
    ///
    /// Out-of-range values are stored as the nearest boundary rather than
    /// rejected, matching the cycle resolver's treatment of stored values.
    pub fn set_payday(&mut self, payday: i64) {
        self.payday = payday.clamp(1, 31) as u32;
    }

    /// Set the monthly budget
    ///
    /// # Errors
    ///
    /// Returns a validation error if the amount is negative.
    pub fn set_monthly_budget(&mut self, amount: Money) -> Result<(), PaycycleError> {
        if amount.is_negative() {
            return Err(PaycycleError::Validation(format!(
                "Monthly budget cannot be negative (got {})",
                amount
            )));
        }
        self.monthly_budget = amount;
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PaycyclePaths) -> Result<Self, PaycycleError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PaycycleError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PaycycleError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PaycyclePaths) -> Result<(), PaycycleError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PaycycleError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            PaycycleError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
