use anyhow::Result;
use clap::{Parser, Subcommand};

use paycycle::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_history_command,
    handle_report_command, handle_status_command,
};
use paycycle::config::{paths::PaycyclePaths, settings::Settings};
use paycycle::storage::Storage;

#[derive(Parser)]
#[command(
    name = "paycycle",
    version,
    about = "Payday-anchored expense tracking from the terminal",
    long_about = "paycycle tracks daily expenses against salary cycles: each cycle \
                  starts on your configured payday and runs until the next one, so \
                  'how much is left' always means the money between two paychecks."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(paycycle::cli::ExpenseCommands),

    /// Budget configuration commands
    #[command(subcommand)]
    Budget(paycycle::cli::BudgetCommands),

    /// Show the current cycle window and budget position
    Status(paycycle::cli::StatusArgs),

    /// Report commands
    #[command(subcommand)]
    Report(paycycle::cli::ReportCommands),

    /// Export commands
    #[command(subcommand)]
    Export(paycycle::cli::ExportCommands),

    /// Show recent changes from the audit log
    History(paycycle::cli::HistoryArgs),

    /// Initialize the expense store
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PaycyclePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Status(args)) => {
            handle_status_command(&storage, &settings, args)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&storage, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing paycycle at: {}", paths.data_dir().display());
            paycycle::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  paycycle budget set --payday 15 --amount 1500");
            println!("  paycycle expense add 12.50 --category food");
            println!("  paycycle status");
        }
        Some(Commands::Config) => {
            println!("paycycle Configuration");
            println!("======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Payday:         day {} of each month", settings.payday);
            println!("  Monthly budget: {}", settings.monthly_budget);
            println!();
            println!("Store:");
            println!("  Expenses:      {}", storage.expenses.count()?);
            println!("  Audit entries: {}", storage.audit().entry_count()?);
        }
        None => {
            println!("paycycle - Payday-anchored expense tracking");
            println!();
            println!("Run 'paycycle --help' for usage information.");
            println!("Run 'paycycle init' to set up the expense store.");
        }
    }

    Ok(())
}
