//! Budget CLI commands
//!
//! Implements CLI commands for the budget configuration: the payday that
//! anchors each cycle and the amount available per cycle.

use clap::Subcommand;

use crate::audit::{generate_diff, EntityType};
use crate::config::settings::Settings;
use crate::error::{PaycycleError, PaycycleResult};
use crate::models::Money;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the payday and/or monthly budget
    Set {
        /// Day of month (1-31) on which a new cycle starts
        #[arg(short, long)]
        payday: Option<i64>,

        /// Budget available per cycle (e.g., "1500" or "1500.00")
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Show the current budget configuration
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: BudgetCommands,
) -> PaycycleResult<()> {
    match cmd {
        BudgetCommands::Set { payday, amount } => {
            if payday.is_none() && amount.is_none() {
                return Err(PaycycleError::Validation(
                    "Nothing to set: pass --payday and/or --amount".to_string(),
                ));
            }

            let before = settings.clone();

            if let Some(payday) = payday {
                settings.set_payday(payday);
            }

            if let Some(amount) = amount {
                let amount = Money::parse(&amount)
                    .map_err(|e| PaycycleError::Validation(format!("Invalid amount: {}", e)))?;
                settings.set_monthly_budget(amount)?;
            }

            settings.save(storage.paths())?;

            let diff = generate_diff(
                &serde_json::to_value(&before)?,
                &serde_json::to_value(&*settings)?,
            );
            storage.log_update(
                EntityType::Settings,
                "settings",
                Some("budget configuration".to_string()),
                &before,
                settings,
                diff,
            )?;

            println!("Budget configuration updated:");
            println!("  Payday:         day {} of each month", settings.payday);
            println!("  Monthly budget: {}", settings.monthly_budget);
        }

        BudgetCommands::Show => {
            println!("Budget configuration:");
            println!("  Payday:         day {} of each month", settings.payday);
            println!("  Monthly budget: {}", settings.monthly_budget);
        }
    }

    Ok(())
}
