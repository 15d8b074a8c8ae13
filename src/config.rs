use std::path::PathBuf;

use crate::store::DEFAULT_DB_PATH;

const APP_DIR: &str = "stat_term";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// `None` means `~/Downloads/player_stats.csv`, resolved at export time.
    pub export_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Loads `.env.local` / `.env` if present, then reads the process env.
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path_var = |key: &str| {
            lookup(key)
                .map(|val| val.trim().to_string())
                .filter(|val| !val.is_empty())
                .map(PathBuf::from)
        };
        Self {
            db_path: path_var("STAT_TERM_DB").unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            export_path: path_var("STAT_TERM_EXPORT_PATH"),
            log_dir: path_var("STAT_TERM_LOG_DIR")
                .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR))),
        }
    }
}
