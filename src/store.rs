use std::path::{Path, PathBuf};

use crate::error::{KursError, Result};
use crate::models::Snapshot;
use crate::settings::{get_data_dir, load_settings};

pub const SNAPSHOT_FILE: &str = "kurs.json";

pub fn snapshot_path() -> PathBuf {
    get_data_dir().join(SNAPSHOT_FILE)
}

/// Load the snapshot, falling back to a fresh default on any read or parse
/// failure. A corrupt file must never prevent the tool from running.
pub fn load_snapshot() -> Snapshot {
    load_snapshot_from(&snapshot_path())
}

pub fn load_snapshot_from(path: &Path) -> Snapshot {
    let base = load_settings().base_currency;
    if !path.exists() {
        return Snapshot::new(&base);
    }
    let content = std::fs::read_to_string(path).unwrap_or_default();
    match serde_json::from_str(&content) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("snapshot at {} is malformed ({e}); starting fresh", path.display());
            Snapshot::new(&base)
        }
    }
}

/// Write the snapshot back. Every mutating command calls this once, after
/// its reducer has produced the new state.
pub fn save_snapshot(snapshot: &Snapshot) -> Result<()> {
    save_snapshot_to(&snapshot_path(), snapshot)
}

pub fn save_snapshot_to(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| KursError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
