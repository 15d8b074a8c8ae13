use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, params, params_from_iter};
use thiserror::Error;

use crate::record::PlayerRecord;
use crate::schema::{League, league_label};

pub const DEFAULT_DB_PATH: &str = "../db/stat-term.db";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Can't open database: {0}")]
    Open(String),
    #[error("SQL error: {0}")]
    Prepare(String),
    #[error("SQL error: {0}")]
    Step(String),
}

/// Lookup of stats rows by exact player name.
pub trait RecordStore {
    fn search(&self, league: League, name: &str) -> Result<Vec<PlayerRecord>, StoreError>;
}

/// SQLite file opened fresh for every search and closed when it returns.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for SqliteStore {
    fn search(&self, league: League, name: &str) -> Result<Vec<PlayerRecord>, StoreError> {
        tracing::debug!(league = league_label(league), player = name, "searching");
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|err| StoreError::Open(err.to_string()))?;

        let schema = league.schema();
        let mut stmt = conn
            .prepare(&schema.select_sql())
            .map_err(|err| StoreError::Prepare(err.to_string()))?;
        let width = stmt.column_count();

        let mut rows = stmt
            .query(params![name])
            .map_err(|err| StoreError::Step(err.to_string()))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(|err| StoreError::Step(err.to_string()))? {
            let values = (0..width)
                .map(|idx| row.get::<_, Value>(idx).unwrap_or(Value::Null))
                .collect::<Vec<_>>();
            out.push(PlayerRecord::decode(league, &values));
        }
        tracing::info!(
            league = league_label(league),
            player = name,
            rows = out.len(),
            "search complete"
        );
        Ok(out)
    }
}

/// Opens (creating if needed) a writable database and ensures both stats
/// tables exist.
pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let conn =
        Connection::open(path).with_context(|| format!("open sqlite db {}", path.display()))?;
    create_tables(&conn)?;
    Ok(conn)
}

pub fn create_tables(conn: &Connection) -> Result<()> {
    for league in League::ALL {
        let schema = league.schema();
        conn.execute(&schema.create_sql(), [])
            .with_context(|| format!("create table {}", schema.table))?;
    }
    Ok(())
}

pub fn insert_record(conn: &Connection, record: &PlayerRecord) -> Result<()> {
    let schema = record.schema();
    conn.execute(&schema.insert_sql(), params_from_iter(record.values()))
        .with_context(|| format!("insert {} into {}", record.player_name(), schema.table))?;
    Ok(())
}

pub fn count_rows(conn: &Connection, league: League) -> Result<i64> {
    let table = league.schema().table;
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .with_context(|| format!("count rows in {table}"))
}
