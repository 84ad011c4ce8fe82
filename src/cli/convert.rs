use colored::Colorize;

use crate::cli::{normalize_code, parse_amount};
use crate::convert;
use crate::error::Result;
use crate::fmt::money;
use crate::store::load_snapshot;

pub fn run(amount: &str, from: &str, to: &str) -> Result<()> {
    let amount = parse_amount(amount)?;
    let from = normalize_code(from);
    let to = normalize_code(to);
    let snapshot = load_snapshot();

    let result = convert::convert(amount, &from, &to, &snapshot.rates)?;
    println!(
        "{} = {}",
        money(amount, &from),
        money(result, &to).bold()
    );
    Ok(())
}
