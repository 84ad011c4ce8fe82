use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Conversion factors relative to the base currency: `rates[code]` is the
/// number of base-currency units one unit of `code` is worth. May be empty
/// or partial before any fetch or manual entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    pub base: String,
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
    #[serde(default)]
    pub fetched_at: Option<String>,
}

impl RateTable {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            rates: BTreeMap::new(),
            fetched_at: None,
        }
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        if code == self.base {
            return Some(1.0);
        }
        self.rates.get(code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// One user-entered budget row. `amount` stays a string: empty or
/// non-numeric input is preserved as typed and contributes zero to sums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: u64,
    pub amount: String,
    pub currency: String,
    pub description: String,
}

impl LineItem {
    /// Parsed amount, or 0.0 when empty/unparsable.
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.trim().parse::<f64>().unwrap_or(0.0)
    }
}

/// Raw expense as entered, kept for display only; the converted figure is
/// folded into the running balance at entry time and never re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub recorded_at: String,
}

/// Everything the tool persists, as one flat blob. Loaded once per command,
/// written back after every mutation. Field defaults keep older or partial
/// snapshots loadable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub total_budget: f64,
    pub rates: RateTable,
    #[serde(default)]
    pub rows: Vec<LineItem>,
    #[serde(default = "first_row_id")]
    pub next_row_id: u64,
    /// Converted total of all recorded expenses, accumulated at entry time.
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub history: Vec<ExpenseRecord>,
}

fn first_row_id() -> u64 {
    1
}

impl Snapshot {
    pub fn new(base: &str) -> Self {
        Self {
            total_budget: 0.0,
            rates: RateTable::new(base),
            rows: Vec::new(),
            next_row_id: first_row_id(),
            spent: 0.0,
            history: Vec::new(),
        }
    }

    /// Running balance for the expense tracker.
    pub fn balance(&self) -> f64 {
        self.total_budget - self.spent
    }
}
