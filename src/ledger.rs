//! Budget ledger reducers and derived totals.
//!
//! State goes in, new state comes out; nothing here touches disk or caches
//! a derived figure. Rows keep insertion order, which is what makes the
//! cumulative "prior total" and "remaining after row" columns meaningful.

use crate::convert::convert_or_zero;
use crate::models::{LineItem, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Amount,
    Currency,
    Description,
}

impl RowField {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "amount" => Some(Self::Amount),
            "currency" => Some(Self::Currency),
            "desc" | "description" => Some(Self::Description),
            _ => None,
        }
    }
}

/// Append a fresh row with a unique id and the given (possibly empty) fields.
pub fn add_row(
    mut state: Snapshot,
    amount: &str,
    currency: &str,
    description: &str,
) -> (Snapshot, u64) {
    let id = state.next_row_id;
    state.next_row_id += 1;
    state.rows.push(LineItem {
        id,
        amount: amount.to_string(),
        currency: currency.to_string(),
        description: description.to_string(),
    });
    (state, id)
}

/// Replace one field on the matching row. Unknown ids leave the state
/// untouched; the bool reports whether anything changed.
pub fn update_row(mut state: Snapshot, id: u64, field: RowField, value: &str) -> (Snapshot, bool) {
    let Some(idx) = state.rows.iter().position(|r| r.id == id) else {
        return (state, false);
    };
    let row = &mut state.rows[idx];
    match field {
        RowField::Amount => row.amount = value.to_string(),
        RowField::Currency => row.currency = value.to_string(),
        RowField::Description => row.description = value.to_string(),
    }
    (state, true)
}

/// Remove the matching row, if any.
pub fn delete_row(mut state: Snapshot, id: u64) -> (Snapshot, bool) {
    let before = state.rows.len();
    state.rows.retain(|r| r.id != id);
    let removed = state.rows.len() < before;
    (state, removed)
}

/// One ledger row with its derived columns, all in the reference currency.
#[derive(Debug, Clone)]
pub struct RowView {
    pub id: u64,
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub converted: f64,
    /// Converted total of every row above this one.
    pub prior_total: f64,
    /// Budget left once this row and all rows above it are spent.
    pub remaining: f64,
}

#[derive(Debug, Clone)]
pub struct LedgerSummary {
    pub rows: Vec<RowView>,
    pub total_converted: f64,
    pub remaining: f64,
}

/// Recompute every derived column from scratch. Unparsable amounts and
/// unknown currencies contribute zero, so the totals are always finite.
pub fn summarize(state: &Snapshot) -> LedgerSummary {
    let mut views = Vec::with_capacity(state.rows.len());
    let mut running = 0.0;
    for row in &state.rows {
        let converted = convert_or_zero(row.amount_or_zero(), &row.currency, &state.rates);
        views.push(RowView {
            id: row.id,
            amount: row.amount.clone(),
            currency: row.currency.clone(),
            description: row.description.clone(),
            converted,
            prior_total: running,
            remaining: state.total_budget - running - converted,
        });
        running += converted;
    }
    LedgerSummary {
        rows: views,
        total_converted: running,
        remaining: state.total_budget - running,
    }
}
