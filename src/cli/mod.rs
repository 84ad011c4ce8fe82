pub mod budget;
pub mod convert;
pub mod expense;
pub mod init;
pub mod rates;
pub mod status;

use clap::{Parser, Subcommand};

use crate::error::{KursError, Result};

/// Parse a user-typed amount. Empty or non-numeric input aborts the command
/// before any state is touched.
pub(crate) fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(KursError::InvalidAmount(raw.to_string())),
    }
}

/// Currency codes are stored uppercased so USD and usd hit the same rate.
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[derive(Parser)]
#[command(name = "kurs", about = "Currency conversion and budget tracking CLI.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up kurs: choose a data directory for the snapshot.
    Init {
        /// Path for kurs data (default: ~/Documents/kurs)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Convert an amount between two currencies.
    Convert {
        /// Amount to convert
        amount: String,
        /// Source currency code
        #[arg(long)]
        from: String,
        /// Destination currency code
        #[arg(long)]
        to: String,
    },
    /// Manage the budget ledger.
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },
    /// Track expenses against the running balance.
    Expense {
        #[command(subcommand)]
        command: ExpenseCommands,
    },
    /// Manage the exchange rate table.
    Rates {
        #[command(subcommand)]
        command: RatesCommands,
    },
    /// Show data directory and snapshot summary.
    Status,
}

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the total budget in the base currency.
    Set {
        /// Total budget amount
        amount: String,
    },
    /// Append a new ledger row; fields may be left empty and filled later.
    Add {
        /// Row amount, as typed
        #[arg(long, default_value = "")]
        amount: String,
        /// Row currency code
        #[arg(long, default_value = "")]
        currency: String,
        /// Free-text description
        #[arg(long, default_value = "")]
        desc: String,
    },
    /// Change one field on an existing row.
    Update {
        /// Row id (see `budget show`)
        id: u64,
        /// Field to change: amount, currency or desc
        #[arg(long)]
        field: String,
        /// New value
        #[arg(long)]
        value: String,
    },
    /// Remove a row.
    Delete {
        /// Row id
        id: u64,
    },
    /// Render the ledger with converted and cumulative columns.
    Show,
}

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense and decrement the running balance.
    Add {
        /// Expense amount
        amount: String,
        /// Expense currency code
        #[arg(long)]
        currency: String,
        /// Free-text description
        #[arg(long, default_value = "")]
        desc: String,
    },
    /// Show the running balance and expense history.
    Show,
}

#[derive(Subcommand)]
pub enum RatesCommands {
    /// Fetch the rate table from the remote service.
    Fetch {
        /// Override the configured rate service URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Set a single rate by hand (base units per one unit of CODE).
    Set {
        /// Currency code
        code: String,
        /// Conversion factor, must be positive
        rate: String,
    },
    /// List the current rate table.
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100.5").unwrap(), 100.5);
        assert_eq!(parse_amount(" 7 ").unwrap(), 7.0);
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" usd "), "USD");
        assert_eq!(normalize_code("KRW"), "KRW");
    }
}
