use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};
use crate::store;

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    std::fs::create_dir_all(&settings.data_dir)?;
    save_settings(&settings)?;

    // Write an empty snapshot so later commands have something to load.
    let path = std::path::Path::new(&settings.data_dir).join(store::SNAPSHOT_FILE);
    if !path.exists() {
        let snapshot = crate::models::Snapshot::new(&settings.base_currency);
        store::save_snapshot_to(&path, &snapshot)?;
    }

    println!("Data dir:      {}", settings.data_dir);
    println!("Base currency: {}", settings.base_currency);
    println!("Ready. Try `kurs rates set USD 1300` then `kurs convert 100 --from USD --to KRW`.");
    Ok(())
}
