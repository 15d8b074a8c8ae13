use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use stat_term::config::Config;
use stat_term::demo;
use stat_term::schema::{League, league_label};
use stat_term::store;

fn main() -> Result<()> {
    let db_path = parse_db_path_arg().unwrap_or_else(|| Config::from_env().db_path);
    let reset = std::env::args().skip(1).any(|arg| arg == "--reset");

    let conn = store::open_db(&db_path)?;
    if reset {
        for league in League::ALL {
            let table = league.schema().table;
            conn.execute(&format!("DELETE FROM {table}"), [])
                .with_context(|| format!("clear {table}"))?;
        }
    }

    let mut inserted = 0usize;
    let mut skipped = Vec::new();
    for league in League::ALL {
        if store::count_rows(&conn, league)? > 0 {
            skipped.push(league_label(league));
            continue;
        }
        for record in demo::demo_records()
            .iter()
            .filter(|r| r.league() == league)
        {
            store::insert_record(&conn, record)?;
            inserted += 1;
        }
    }

    println!("Seed complete at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("DB: {}", db_path.display());
    println!("Rows inserted: {inserted}");
    if !skipped.is_empty() {
        println!(
            "Skipped non-empty tables: {} (use --reset to replace)",
            skipped.join(", ")
        );
    }
    for league in League::ALL {
        println!(
            "{}: {} rows",
            league_label(league),
            store::count_rows(&conn, league)?
        );
    }
    Ok(())
}

fn parse_db_path_arg() -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--db=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--db"
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(PathBuf::from(next));
        }
    }
    None
}
