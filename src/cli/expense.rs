use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{normalize_code, parse_amount};
use crate::error::Result;
use crate::fmt::{money, number};
use crate::store::{load_snapshot, save_snapshot};
use crate::tracker;

pub fn add(amount: &str, currency: &str, desc: &str) -> Result<()> {
    let amount = parse_amount(amount)?;
    let currency = normalize_code(currency);
    let snapshot = load_snapshot();
    let base = snapshot.rates.base.clone();

    let (snapshot, outcome) = tracker::add_expense(snapshot, amount, &currency, desc)?;
    save_snapshot(&snapshot)?;

    println!(
        "Spent {} ({})",
        money(amount, &currency),
        money(outcome.converted, &base)
    );
    let balance = money(outcome.balance, &base);
    if outcome.balance < 0.0 {
        println!("Balance: {}", balance.red().bold());
    } else {
        println!("Balance: {}", balance.bold());
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let snapshot = load_snapshot();
    let base = &snapshot.rates.base;

    if snapshot.history.is_empty() {
        println!("No expenses recorded.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["When", "Amount", "Currency", "Description"]);
        for record in &snapshot.history {
            table.add_row(vec![
                Cell::new(&record.recorded_at),
                Cell::new(number(record.amount)),
                Cell::new(&record.currency),
                Cell::new(&record.description),
            ]);
        }
        println!("Expenses\n{table}");
    }

    println!();
    println!("Started with:  {}", money(snapshot.total_budget, base));
    println!("Spent:         {}", money(snapshot.spent, base));
    println!("Balance:       {}", money(snapshot.balance(), base).bold());
    Ok(())
}
