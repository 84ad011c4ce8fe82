use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{normalize_code, parse_amount};
use crate::error::{KursError, Result};
use crate::fmt::{money, number};
use crate::ledger::{self, RowField};
use crate::store::{load_snapshot, save_snapshot};

pub fn set(amount: &str) -> Result<()> {
    let amount = parse_amount(amount)?;
    let mut snapshot = load_snapshot();
    snapshot.total_budget = amount;
    save_snapshot(&snapshot)?;
    println!("Total budget: {}", money(amount, &snapshot.rates.base));
    Ok(())
}

pub fn add(amount: &str, currency: &str, desc: &str) -> Result<()> {
    let snapshot = load_snapshot();
    let currency = if currency.is_empty() {
        String::new()
    } else {
        normalize_code(currency)
    };
    let (snapshot, id) = ledger::add_row(snapshot, amount.trim(), &currency, desc);
    save_snapshot(&snapshot)?;
    println!("Added row {id}");
    Ok(())
}

pub fn update(id: u64, field: &str, value: &str) -> Result<()> {
    let field = RowField::parse(field).ok_or_else(|| {
        KursError::Other(format!("Unknown field: {field} (try amount, currency or desc)"))
    })?;
    let value = match field {
        RowField::Currency => normalize_code(value),
        _ => value.to_string(),
    };
    let snapshot = load_snapshot();
    let (snapshot, changed) = ledger::update_row(snapshot, id, field, &value);
    if changed {
        save_snapshot(&snapshot)?;
        println!("Updated row {id}");
    } else {
        println!("No row with id {id}");
    }
    Ok(())
}

pub fn delete(id: u64) -> Result<()> {
    let snapshot = load_snapshot();
    let (snapshot, removed) = ledger::delete_row(snapshot, id);
    if removed {
        save_snapshot(&snapshot)?;
        println!("Deleted row {id}");
    } else {
        println!("No row with id {id}");
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let snapshot = load_snapshot();
    let base = snapshot.rates.base.clone();
    let summary = ledger::summarize(&snapshot);

    if summary.rows.is_empty() {
        println!("No budget rows. Add one with `kurs budget add`.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            "ID".to_string(),
            "Amount".to_string(),
            "Currency".to_string(),
            "Description".to_string(),
            format!("In {base}"),
            "Prior total".to_string(),
            "Remaining".to_string(),
        ]);
        for row in &summary.rows {
            table.add_row(vec![
                Cell::new(row.id),
                Cell::new(&row.amount),
                Cell::new(&row.currency),
                Cell::new(&row.description),
                Cell::new(number(row.converted)),
                Cell::new(number(row.prior_total)),
                Cell::new(number(row.remaining)),
            ]);
        }
        println!("Budget ledger\n{table}");
    }

    println!();
    println!("Total budget:   {}", money(snapshot.total_budget, &base));
    println!("Total spent:    {}", money(summary.total_converted, &base));
    let remaining = money(summary.remaining, &base);
    if summary.remaining < 0.0 {
        println!("Remaining:      {}", remaining.red().bold());
    } else {
        println!("Remaining:      {}", remaining.bold());
    }
    Ok(())
}
