use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::record::PlayerRecord;

pub const EXPORT_DIR: &str = "Downloads";
pub const EXPORT_FILE: &str = "player_stats.csv";

pub fn default_export_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(EXPORT_DIR).join(EXPORT_FILE))
}

/// Header line plus one data line. Fields are joined with commas as-is; text
/// containing a comma is not quoted.
pub fn csv_text(record: &PlayerRecord) -> String {
    let row = record
        .values()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}\n{row}\n", record.schema().csv_header())
}

/// Writes `record` to `path`, replacing any existing file.
pub fn export_record(path: &Path, record: &PlayerRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create export dir {}", parent.display()))?;
    }
    fs::write(path, csv_text(record))
        .with_context(|| format!("write export {}", path.display()))?;
    tracing::info!(path = %path.display(), player = record.player_name(), "exported csv");
    Ok(())
}

/// Resolves the destination (configured path or `~/Downloads`) and exports.
pub fn export_selected(configured: Option<&Path>, record: &PlayerRecord) -> Result<PathBuf> {
    let path = match configured {
        Some(path) => path.to_path_buf(),
        None => default_export_path().ok_or_else(|| anyhow!("could not resolve home directory"))?,
    };
    export_record(&path, record)?;
    Ok(path)
}
