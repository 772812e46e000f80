use crate::errors::{AppError, AppResult};
use crate::models::punch::{NewPunch, TimePunch};
use crate::models::work_config::{WorkConfig, WorkDay};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::BTreeSet;

const PUNCH_COLUMNS: &str =
    "id, date, entry, lunch_out, lunch_in, exit, note, valid, is_holiday, created_at";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<TimePunch> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    Ok(TimePunch {
        id: row.get("id")?,
        date,
        entry: row.get("entry")?,
        lunch_out: row.get("lunch_out")?,
        lunch_in: row.get("lunch_in")?,
        exit: row.get("exit")?,
        note: row.get("note")?,
        valid: row.get::<_, i32>("valid")? == 1,
        is_holiday: row.get::<_, i32>("is_holiday")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Punches with `start <= date <= end`, ordered by date then creation.
pub fn load_punches_between(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<TimePunch>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PUNCH_COLUMNS} FROM punches
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, id ASC"
    ))?;

    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_punch_by_id(conn: &Connection, id: i64) -> AppResult<Option<TimePunch>> {
    let punch = conn
        .query_row(
            &format!("SELECT {PUNCH_COLUMNS} FROM punches WHERE id = ?1"),
            [id],
            map_row,
        )
        .optional()?;
    Ok(punch)
}

pub fn insert_punch(conn: &Connection, p: &NewPunch) -> AppResult<TimePunch> {
    let draft = TimePunch::from_new(0, p);

    conn.execute(
        "INSERT INTO punches (date, entry, lunch_out, lunch_in, exit, note, valid, is_holiday, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            draft.date_str(),
            draft.entry,
            draft.lunch_out,
            draft.lunch_in,
            draft.exit,
            draft.note,
            if draft.valid { 1 } else { 0 },
            if draft.is_holiday { 1 } else { 0 },
            draft.created_at,
        ],
    )?;

    Ok(TimePunch {
        id: conn.last_insert_rowid(),
        ..draft
    })
}

/// Returns the number of deleted rows (0 or 1).
pub fn delete_punch(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM punches WHERE id = ?1", [id])?)
}

pub fn load_work_config(conn: &Connection) -> AppResult<WorkConfig> {
    let row = conn
        .query_row(
            "SELECT daily_expected_minutes, default_entry_time, default_exit_time,
                    default_lunch_minutes, count_absence_as_debit, working_days, rounding_minutes
             FROM work_config WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i32>(4)? == 1,
                    row.get::<_, String>(5)?,
                    row.get::<_, Option<i64>>(6)?,
                ))
            },
        )
        .optional()?;

    let (daily, entry, exit, lunch, absence_debit, days_json, rounding) =
        row.ok_or(AppError::ConfigMissing)?;

    let working_days: BTreeSet<WorkDay> = serde_json::from_str(&days_json)?;

    Ok(WorkConfig {
        daily_expected_minutes: daily,
        default_entry_time: entry,
        default_exit_time: exit,
        default_lunch_minutes: lunch,
        count_absence_as_debit: absence_debit,
        working_days,
        rounding_minutes: rounding,
    })
}

/// Full replace of the singleton row.
pub fn save_work_config(conn: &Connection, cfg: &WorkConfig) -> AppResult<()> {
    let updated = conn.execute(
        "UPDATE work_config
         SET daily_expected_minutes = ?1, default_entry_time = ?2, default_exit_time = ?3,
             default_lunch_minutes = ?4, count_absence_as_debit = ?5,
             working_days = ?6, rounding_minutes = ?7
         WHERE id = 1",
        params![
            cfg.daily_expected_minutes,
            cfg.default_entry_time,
            cfg.default_exit_time,
            cfg.default_lunch_minutes,
            if cfg.count_absence_as_debit { 1 } else { 0 },
            cfg.working_days_json()?,
            cfg.rounding_minutes,
        ],
    )?;

    if updated == 0 {
        return Err(AppError::ConfigMissing);
    }
    Ok(())
}
