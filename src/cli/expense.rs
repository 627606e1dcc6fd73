//! Expense CLI commands
//!
//! Implements CLI commands for expense management: add, list, show,
//! update, and delete.

use clap::{Subcommand, ValueEnum};

use crate::display::{format_expense_details, format_expense_list};
use crate::error::{PaycycleError, PaycycleResult};
use crate::models::Money;
use crate::services::{
    CreateExpenseInput, ExpenseFilter, ExpenseService, SortDirection, SortKey, UpdateExpenseInput,
};
use crate::storage::Storage;

use super::{parse_category, parse_date};

/// Sort key for `expense list`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortField {
    Date,
    Amount,
    Category,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Date => SortKey::Date,
            SortField::Amount => SortKey::Amount,
            SortField::Category => SortKey::Category,
        }
    }
}

// clap needs Display for default_value_t
impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortField::Date => "date",
            SortField::Amount => "amount",
            SortField::Category => "category",
        };
        write!(f, "{}", s)
    }
}

/// Sort order for `expense list`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Asc,
            SortOrder::Desc => SortDirection::Desc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        };
        write!(f, "{}", s)
    }
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount (e.g., "12.50" or "$12.50")
        amount: String,

        /// Category (Food, Transport, Utilities, Rent, Entertainment, Other)
        #[arg(short, long)]
        category: String,

        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,
    },

    /// List expenses
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Keep expenses dated on or after this day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Keep expenses dated on or before this day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Sort key
        #[arg(short, long, value_enum, default_value_t = SortField::Date)]
        sort: SortField,

        /// Sort direction
        #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
        direction: SortOrder,

        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single expense
    Show {
        /// Expense ID (full UUID or short form like "exp-550e8400")
        id: String,
    },

    /// Update an expense
    Update {
        /// Expense ID
        id: String,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,

        /// Delete without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> PaycycleResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| PaycycleError::Validation(format!("Invalid amount: {}", e)))?;
            let category = parse_category(&category)?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let expense = service.create(CreateExpenseInput {
                amount,
                category,
                date,
                description,
            })?;

            println!("Added expense {}: {}", expense.id, expense);
        }

        ExpenseCommands::List {
            category,
            from,
            to,
            sort,
            direction,
            limit,
        } => {
            let mut filter = ExpenseFilter::new()
                .sort(sort.into())
                .direction(direction.into());
            if let Some(category) = category {
                filter = filter.category(parse_category(&category)?);
            }
            if let Some(from) = from {
                filter = filter.from(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.to(parse_date(&to)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(filter)?;
            print!("{}", format_expense_list(&expenses));

            if !expenses.is_empty() {
                let total: Money = expenses.iter().map(|e| e.amount).sum();
                println!("Total: {} ({} expenses)", total, expenses.len());
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service.get(&id)?;
            print!("{}", format_expense_details(&expense));
        }

        ExpenseCommands::Update {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let amount = amount
                .map(|a| {
                    Money::parse(&a)
                        .map_err(|e| PaycycleError::Validation(format!("Invalid amount: {}", e)))
                })
                .transpose()?;
            let category = category.as_deref().map(parse_category).transpose()?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let expense = service.update(
                &id,
                UpdateExpenseInput {
                    amount,
                    category,
                    date,
                    description,
                },
            )?;

            println!("Updated expense {}: {}", expense.id, expense);
        }

        ExpenseCommands::Delete { id, force } => {
            let expense = service.get(&id)?;

            if !force {
                print!("{}", format_expense_details(&expense));
                println!();
                println!("Re-run with --force to delete this expense.");
                return Ok(());
            }

            service.delete(&id)?;
            println!("Deleted expense {}", expense.id);
        }
    }

    Ok(())
}
