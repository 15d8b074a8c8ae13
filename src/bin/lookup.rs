//! Prints every stored line for one player without starting the TUI.
//!
//! Usage: `lookup [--nfl] [--db PATH] [--csv] <player name>`

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use stat_term::config::Config;
use stat_term::export;
use stat_term::schema::{League, league_label};
use stat_term::store::{RecordStore, SqliteStore};
use stat_term::view;

fn main() -> Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let config = Config::from_env();

    let mut league = League::Nba;
    let mut db_path = config.db_path.clone();
    let mut write_csv = false;
    let mut name_parts = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--nfl" => league = League::Nfl,
            "--nba" => league = League::Nba,
            "--csv" => write_csv = true,
            "--db" => {
                let next = iter.next().ok_or_else(|| anyhow!("--db needs a path"))?;
                db_path = PathBuf::from(next);
            }
            other => name_parts.push(other.to_string()),
        }
    }
    let name = name_parts.join(" ");
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("usage: lookup [--nfl] [--db PATH] [--csv] <player name>"));
    }

    let store = SqliteStore::new(db_path);
    let records = store.search(league, name)?;
    if records.is_empty() {
        println!("{}", view::not_found_message(name));
        return Ok(());
    }

    println!("{} | {} line(s)", league_label(league), records.len());
    for record in &records {
        println!();
        println!("{}", view::stats_title(record));
        println!(
            "{} | {} | {} | Age {}",
            record.player_name(),
            record.team(),
            record.position(),
            record.age()
        );
        for line in view::stat_lines(record) {
            println!("  {line}");
        }
    }

    if write_csv {
        let path = export::export_selected(config.export_path.as_deref(), &records[0])?;
        println!();
        println!("Saved to {}", path.display());
    }
    Ok(())
}
