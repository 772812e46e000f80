//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Punch logic errors
    // ---------------------------
    #[error("Punch rejected: {0}")]
    InvalidPunch(String),

    #[error("A valid punch already exists for {0}; delete it first")]
    DuplicatePunch(String),

    #[error("No punch found with id {0}")]
    PunchNotFound(i64),

    #[error("Missing lunch time: provide --lunch-out and/or --lunch-in")]
    MissingLunch,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Work configuration not found: run `rtimebank init` first")]
    ConfigMissing,

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
