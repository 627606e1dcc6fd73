//! Export CLI commands

use clap::Subcommand;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{PaycycleError, PaycycleResult};
use crate::export::{
    export_expenses_csv, export_full_json, export_full_yaml, resolve_output_path,
};
use crate::storage::Storage;

use super::parse_date;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expense rows to CSV
    Csv {
        /// Keep expenses dated on or after this day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Keep expenses dated on or before this day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Output file; a directory gets a default file name; omit for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full store to JSON
    Json {
        /// Output file; a directory gets a default file name; omit for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compact output instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Export the full store to YAML
    Yaml {
        /// Output file; a directory gets a default file name; omit for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> PaycycleResult<()> {
    match cmd {
        ExportCommands::Csv { from, to, output } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;

            let mut buffer = Vec::new();
            export_expenses_csv(storage, &mut buffer, from, to)?;
            write_output(output, "csv", &buffer)?;
        }

        ExportCommands::Json { output, compact } => {
            let mut buffer = Vec::new();
            export_full_json(storage, settings, &mut buffer, !compact)?;
            write_output(output, "json", &buffer)?;
        }

        ExportCommands::Yaml { output } => {
            let mut buffer = Vec::new();
            export_full_yaml(storage, settings, &mut buffer)?;
            write_output(output, "yaml", &buffer)?;
        }
    }

    Ok(())
}

/// Write an export either to the resolved output path or to stdout
fn write_output(output: Option<PathBuf>, extension: &str, data: &[u8]) -> PaycycleResult<()> {
    match output {
        Some(output) => {
            let path = resolve_output_path(&output, extension);
            std::fs::write(&path, data).map_err(|e| {
                PaycycleError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;
            println!("Exported to {}", path.display());
        }
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(data)
                .map_err(|e| PaycycleError::Export(e.to_string()))?;
        }
    }

    Ok(())
}
