use crate::error::{KursError, Result};
use crate::models::RateTable;

/// Convert `amount` from one currency to another through the base currency.
///
/// Rates are base units per one unit of the foreign code, so converting into
/// the base multiplies and converting out of the base divides; any other
/// pair goes through the cross rate `rate[from] / rate[to]`.
pub fn convert(amount: f64, from: &str, to: &str, table: &RateTable) -> Result<f64> {
    if from == to {
        return Ok(amount);
    }
    let from_rate = checked_rate(table, from)?;
    let to_rate = checked_rate(table, to)?;
    Ok(amount * from_rate / to_rate)
}

/// Converted amount for ledger sums: missing rates and unparsable input are
/// worth zero rather than an error, so one bad row never poisons a total.
pub fn convert_or_zero(amount: f64, from: &str, table: &RateTable) -> f64 {
    match table.rate(from) {
        Some(rate) if rate > 0.0 => amount * rate,
        _ => 0.0,
    }
}

fn checked_rate(table: &RateTable, code: &str) -> Result<f64> {
    let rate = table
        .rate(code)
        .ok_or_else(|| KursError::UnknownCurrency(code.to_string()))?;
    if rate <= 0.0 || !rate.is_finite() {
        return Err(KursError::InvalidRate(code.to_string()));
    }
    Ok(rate)
}
