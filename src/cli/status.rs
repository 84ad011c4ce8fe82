use crate::error::Result;
use crate::fmt::money;
use crate::settings::load_settings;
use crate::store::{load_snapshot, snapshot_path};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let path = snapshot_path();

    println!("Data dir:      {}", settings.data_dir);
    println!("Snapshot:      {}", path.display());
    println!("Base currency: {}", settings.base_currency);

    if !path.exists() {
        println!();
        println!("Snapshot not found. Run `kurs init` to set up.");
        return Ok(());
    }

    let snapshot = load_snapshot();
    println!();
    println!("Rates:         {}", snapshot.rates.rates.len());
    println!("Budget rows:   {}", snapshot.rows.len());
    println!("Expenses:      {}", snapshot.history.len());
    println!("Total budget:  {}", money(snapshot.total_budget, &snapshot.rates.base));
    println!("Balance:       {}", money(snapshot.balance(), &snapshot.rates.base));
    Ok(())
}
