//! History CLI command
//!
//! Shows recent audit log entries: what changed, when, and how.

use clap::Args;

use crate::error::PaycycleResult;
use crate::storage::Storage;

/// Arguments for the history command
#[derive(Args)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Handle the history command
pub fn handle_history_command(storage: &Storage, args: HistoryArgs) -> PaycycleResult<()> {
    let entries = storage.audit().read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No recorded changes yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!();
    println!(
        "Showing {} of {} recorded changes.",
        entries.len(),
        storage.audit().entry_count()?
    );

    Ok(())
}
