use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Aggregate figures about the punches table.
#[derive(Debug, Default)]
pub struct DbStats {
    pub total_punches: i64,
    pub invalid_punches: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect(pool: &DbPool) -> AppResult<DbStats> {
    let (total, invalid): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(CASE WHEN valid = 0 THEN 1 ELSE 0 END), 0) FROM punches",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let (first_date, last_date): (Option<String>, Option<String>) = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM punches", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?
        .unwrap_or((None, None));

    Ok(DbStats {
        total_punches: total,
        invalid_punches: invalid,
        first_date,
        last_date,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) PUNCHES
    //
    let stats = collect(pool)?;
    println!(
        "{}• Punches:{} {}{}{} ({} not counted)",
        CYAN, RESET, GREEN, stats.total_punches, RESET, stats.invalid_punches
    );

    //
    // 3) DATE RANGE
    //
    let fmt = |d: Option<String>| d.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(stats.first_date));
    println!("    to:   {}", fmt(stats.last_date));

    println!();
    Ok(())
}
