use comfy_table::{Cell, Table};

use crate::cli::{normalize_code, parse_amount};
use crate::error::{KursError, Result};
use crate::rates::{HttpRateSource, RateSource};
use crate::settings::load_settings;
use crate::store::{load_snapshot, save_snapshot};

pub fn fetch(url: Option<String>) -> Result<()> {
    let url = match url.or_else(|| {
        let configured = load_settings().rate_url;
        (!configured.is_empty()).then_some(configured)
    }) {
        Some(u) => u,
        None => {
            return Err(KursError::Other(
                "No rate service configured. Pass --url or set rate_url in settings.".to_string(),
            ))
        }
    };

    let mut snapshot = load_snapshot();
    match HttpRateSource.fetch(&url) {
        Ok(fetched) => {
            let count = fetched.len();
            snapshot.rates.rates = fetched;
            snapshot.rates.fetched_at =
                Some(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string());
            save_snapshot(&snapshot)?;
            println!("Fetched {count} rates (base {})", snapshot.rates.base);
        }
        Err(e) => {
            // Keep whatever table we had; the rest of the tool still works.
            log::warn!("rate fetch from {url} failed: {e}");
            println!("Fetch failed, keeping previous rates ({})", e);
        }
    }
    Ok(())
}

pub fn set(code: &str, rate: &str) -> Result<()> {
    let code = normalize_code(code);
    let rate = parse_amount(rate)?;
    if rate <= 0.0 {
        return Err(KursError::InvalidRate(code));
    }
    let mut snapshot = load_snapshot();
    if code == snapshot.rates.base {
        return Err(KursError::Other(format!(
            "{code} is the base currency; its rate is always 1"
        )));
    }
    snapshot.rates.rates.insert(code.clone(), rate);
    save_snapshot(&snapshot)?;
    println!("Set {code} = {rate} {}", snapshot.rates.base);
    Ok(())
}

pub fn list() -> Result<()> {
    let snapshot = load_snapshot();
    if snapshot.rates.is_empty() {
        println!("No rates on record. Use `kurs rates fetch` or `kurs rates set`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Code".to_string(),
        format!("{} per unit", snapshot.rates.base),
    ]);
    for (code, rate) in &snapshot.rates.rates {
        table.add_row(vec![Cell::new(code), Cell::new(rate)]);
    }
    println!("Exchange rates\n{table}");
    if let Some(at) = &snapshot.rates.fetched_at {
        println!("Last fetched: {at}");
    }
    Ok(())
}
