pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;

use crate::core::period::{default_period, parse_period};
use crate::errors::AppResult;
use crate::models::period::Period;
use crate::utils::date;

/// `--period` value, or the current month up to today.
pub(crate) fn resolve_period(period: &Option<String>) -> AppResult<Period> {
    match period {
        Some(p) => parse_period(p, date::today()),
        None => Ok(default_period(date::today())),
    }
}
