//! Report CLI commands

use chrono::Local;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{PaycycleError, PaycycleResult};
use crate::export::resolve_output_path;
use crate::reports::SummaryReport;
use crate::storage::Storage;

use super::{parse_category, parse_date};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Expense summary with per-category totals and the cycle position
    Summary {
        /// Inclusive start of the reported period (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Inclusive end of the reported period (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Write the report to a file instead of stdout; a directory
        /// gets a default file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> PaycycleResult<()> {
    match cmd {
        ReportCommands::Summary {
            from,
            to,
            category,
            output,
        } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            let category = category.as_deref().map(parse_category).transpose()?;

            let report = SummaryReport::generate(
                storage,
                settings,
                from,
                to,
                category,
                Local::now().date_naive(),
            )?;
            let text = report.format_text();

            match output {
                Some(output) => {
                    let path = resolve_output_path(&output, "txt");
                    std::fs::write(&path, &text).map_err(|e| {
                        PaycycleError::Export(format!(
                            "Failed to write {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    println!("Report written to {}", path.display());
                }
                None => print!("{}", text),
            }
        }
    }

    Ok(())
}
