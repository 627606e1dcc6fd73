//! Expense categories
//!
//! Expenses are classified into a fixed set of categories. The set is closed:
//! reports and filters can rely on every record carrying one of these labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Rent,
    Entertainment,
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Utilities,
            Self::Rent,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Get the canonical name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Rent => "Rent",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| CategoryParseError::Unknown(needle.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => {
                let valid: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
                write!(f, "Unknown category '{}' (valid: {})", s, valid.join(", "))
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}
