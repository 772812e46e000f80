//! Time utilities: parsing HH:MM, formatting minute counts and balances.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("static HH:MM regex"));

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse a `HH:MM` time of day into minutes since midnight (`0..=1439`).
pub fn time_to_minutes(t: &str) -> AppResult<i64> {
    let trimmed = t.trim();
    let caps = HHMM
        .captures(trimmed)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))?;

    let hours: i64 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;
    let minutes: i64 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;

    if hours > 23 || minutes > 59 {
        return Err(AppError::InvalidTime(t.to_string()));
    }

    Ok(hours * 60 + minutes)
}

/// Format a minute count as `HH:MM`.
///
/// Works as a duration formatter too: hours are not wrapped at 24,
/// and negative counts get a leading `-`.
pub fn minutes_to_time(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Signed balance for reports: `+01:15`, `-00:40`, `00:00`.
pub fn format_balance(mins: i64) -> String {
    if mins > 0 {
        format!("+{}", minutes_to_time(mins))
    } else {
        minutes_to_time(mins)
    }
}

/// Shift a time of day by `delta` minutes, staying within the same day.
pub fn shift_time(t: &str, delta: i64) -> AppResult<String> {
    let leaves_day = || {
        AppError::InvalidTime(format!("{} shifted by {} min leaves the day", t, delta))
    };

    let shifted = time_to_minutes(t)?
        .checked_add(delta)
        .ok_or_else(leaves_day)?;
    if !(0..MINUTES_PER_DAY).contains(&shifted) {
        return Err(leaves_day());
    }
    Ok(minutes_to_time(shifted))
}
