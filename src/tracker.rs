//! Expense tracker: a running balance in the reference currency.
//!
//! Each expense is converted once, at entry time, and folded into the spent
//! total; the history keeps the raw figures as typed. There is no editing
//! or deletion of recorded expenses.

use crate::convert::convert;
use crate::error::Result;
use crate::models::{ExpenseRecord, Snapshot};

/// Outcome of recording one expense, for display.
#[derive(Debug, Clone, Copy)]
pub struct ExpenseOutcome {
    pub converted: f64,
    pub balance: f64,
}

/// Convert the expense to the reference currency, decrement the balance and
/// append the raw record. Fails (leaving state unchanged) when no rate is on
/// record for `currency`.
pub fn add_expense(
    mut state: Snapshot,
    amount: f64,
    currency: &str,
    description: &str,
) -> Result<(Snapshot, ExpenseOutcome)> {
    let base = state.rates.base.clone();
    let converted = convert(amount, currency, &base, &state.rates)?;
    state.spent += converted;
    state.history.push(ExpenseRecord {
        amount,
        currency: currency.to_string(),
        description: description.to_string(),
        recorded_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
    });
    let outcome = ExpenseOutcome {
        converted,
        balance: state.balance(),
    };
    Ok((state, outcome))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::KursError;

    fn funded_state() -> Snapshot {
        let mut state = Snapshot::new("KRW");
        state.total_budget = 1_000_000.0;
        state.rates.rates.insert("USD".to_string(), 1300.0);
        state
    }

    #[test]
    fn test_expense_decrements_balance() {
        let (state, outcome) = add_expense(funded_state(), 100.0, "USD", "hotel").unwrap();
        assert_relative_eq!(outcome.converted, 130_000.0);
        assert_relative_eq!(outcome.balance, 870_000.0);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].amount, 100.0);
        assert_eq!(state.history[0].currency, "USD");
    }

    #[test]
    fn test_base_currency_expense_passes_through() {
        let (state, outcome) = add_expense(funded_state(), 5000.0, "KRW", "lunch").unwrap();
        assert_relative_eq!(outcome.converted, 5000.0);
        assert_relative_eq!(state.balance(), 995_000.0);
    }

    #[test]
    fn test_unknown_currency_leaves_state_intact() {
        let err = add_expense(funded_state(), 10.0, "GBP", "").unwrap_err();
        assert!(matches!(err, KursError::UnknownCurrency(_)));
    }

    #[test]
    fn test_balance_can_go_negative() {
        let mut state = funded_state();
        state.total_budget = 100_000.0;
        let (state, outcome) = add_expense(state, 100.0, "USD", "").unwrap();
        assert_relative_eq!(outcome.balance, -30_000.0);
        assert_relative_eq!(state.balance(), -30_000.0);
    }
}
