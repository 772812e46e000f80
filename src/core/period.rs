//! Period resolution from user input.
//!
//! Supported forms:
//! - `today`
//! - `YYYY-MM-DD` (day)
//! - `YYYY-Www` (ISO week, Monday to Sunday)
//! - `YYYY-MM` (month)
//! - `YYYY` (year)
//! - `A:B` with both sides in the same form above (custom range, start of A to end of B)

use crate::errors::{AppError, AppResult};
use crate::models::period::{Period, PeriodKind};
use crate::utils::date::{first_of_month, month_last_day};
use chrono::{NaiveDate, Weekday};

fn invalid(p: &str, why: &str) -> AppError {
    AppError::InvalidPeriod(format!("'{}': {}", p, why))
}

/// Current month, from the 1st up to today.
pub fn default_period(today: NaiveDate) -> Period {
    Period::new(PeriodKind::Month, first_of_month(today), today)
}

pub fn parse_period(p: &str, today: NaiveDate) -> AppResult<Period> {
    let p = p.trim();

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = parse_single(start_raw.trim(), today)?;
        let end = parse_single(end_raw.trim(), today)?;

        if start.kind != end.kind {
            return Err(invalid(p, "start and end must have same format"));
        }

        return Ok(Period::custom(start.start, end.end));
    }

    parse_single(p, today)
}

fn parse_single(p: &str, today: NaiveDate) -> AppResult<Period> {
    if p.eq_ignore_ascii_case("today") {
        return Ok(Period::new(PeriodKind::Day, today, today));
    }

    // YYYY-Www
    if let Some((y, w)) = p.split_once("-W").or_else(|| p.split_once("-w")) {
        let year: i32 = y.parse().map_err(|_| invalid(p, "invalid year"))?;
        let week: u32 = w.parse().map_err(|_| invalid(p, "invalid week"))?;
        let start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .ok_or_else(|| invalid(p, "invalid ISO week"))?;
        let end = NaiveDate::from_isoywd_opt(year, week, Weekday::Sun)
            .ok_or_else(|| invalid(p, "invalid ISO week"))?;
        return Ok(Period::new(PeriodKind::Week, start, end));
    }

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p, "invalid year"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p, "invalid year"))?;
            Ok(Period::new(PeriodKind::Year, d1, d2))
        }
        // YYYY-MM
        7 => {
            let (y, m) = p.split_once('-').ok_or_else(|| invalid(p, "expected YYYY-MM"))?;
            let y: i32 = y.parse().map_err(|_| invalid(p, "invalid year"))?;
            let m: u32 = m.parse().map_err(|_| invalid(p, "invalid month"))?;
            let last = month_last_day(y, m).ok_or_else(|| invalid(p, "invalid month"))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(p, "invalid month"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| invalid(p, "invalid month"))?;
            Ok(Period::new(PeriodKind::Month, d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| invalid(p, "invalid date"))?;
            Ok(Period::new(PeriodKind::Day, d, d))
        }
        _ => Err(invalid(p, "unsupported period format")),
    }
}
