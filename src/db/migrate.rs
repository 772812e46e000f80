use crate::errors::{AppError, AppResult};
use crate::models::work_config::WorkConfig;
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> AppResult<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251020_0001_create_punches",
        description: "Created punches table",
        apply: create_punches_table,
    },
    Migration {
        version: "20251020_0002_create_work_config",
        description: "Created work_config table with default row",
        apply: create_work_config_table,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_punches_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            entry       TEXT NOT NULL,
            lunch_out   TEXT NOT NULL,
            lunch_in    TEXT NOT NULL,
            exit        TEXT NOT NULL,
            note        TEXT,
            valid       INTEGER NOT NULL DEFAULT 1,
            is_holiday  INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punches_date ON punches(date);
        "#,
    )?;
    Ok(())
}

/// Single-row table: the CHECK keeps it a singleton and the default row
/// is written here, so every initialized database has a configuration.
fn create_work_config_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_config (
            id                      INTEGER PRIMARY KEY CHECK (id = 1),
            daily_expected_minutes  INTEGER NOT NULL,
            default_entry_time      TEXT NOT NULL,
            default_exit_time       TEXT NOT NULL,
            default_lunch_minutes   INTEGER NOT NULL,
            count_absence_as_debit  INTEGER NOT NULL DEFAULT 0,
            working_days            TEXT NOT NULL,
            rounding_minutes        INTEGER
        );
        "#,
    )?;

    let d = WorkConfig::default();
    conn.execute(
        "INSERT OR IGNORE INTO work_config
            (id, daily_expected_minutes, default_entry_time, default_exit_time,
             default_lunch_minutes, count_absence_as_debit, working_days, rounding_minutes)
         VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            d.daily_expected_minutes,
            d.default_entry_time,
            d.default_exit_time,
            d.default_lunch_minutes,
            d.count_absence_as_debit,
            d.working_days_json()?,
            d.rounding_minutes,
        ],
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply_migration(conn: &Connection, m: &Migration) -> AppResult<bool> {
    if is_applied(conn, m.version)? {
        return Ok(false);
    }

    (m.apply)(conn).map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(true)
}

/// Public entry point: run all pending migrations, returning how many ran.
///
/// Called by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if apply_migration(conn, m)? {
            applied += 1;
        }
    }

    Ok(applied)
}
