//! Status CLI command
//!
//! Shows the current cycle window and budget position.

use chrono::Local;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_cycle_status;
use crate::error::PaycycleResult;
use crate::services::CycleService;
use crate::storage::Storage;

use super::parse_date;

/// Arguments for the status command
#[derive(Args)]
pub struct StatusArgs {
    /// Reference date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle the status command
pub fn handle_status_command(
    storage: &Storage,
    settings: &Settings,
    args: StatusArgs,
) -> PaycycleResult<()> {
    let reference = match args.date {
        Some(date) => parse_date(&date)?,
        None => Local::now().date_naive(),
    };

    let status = CycleService::new(storage, settings).status(reference)?;
    print!("{}", format_cycle_status(&status));

    Ok(())
}
