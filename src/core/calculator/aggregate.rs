//! Period aggregation: totals, daily series and running balance over the
//! working days of a period.

use crate::core::calculator::daily::{compute_daily_balance, compute_worked_minutes};
use crate::errors::AppResult;
use crate::models::period::Period;
use crate::models::punch::TimePunch;
use crate::models::summary::{AccumulatedBalance, DailyBalance, Series, Summary};
use crate::models::work_config::{WorkConfig, WorkDay};
use crate::utils::date::days_between;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeSet, HashMap};

/// Dates in `start..=end` whose weekday is in `days`, ascending.
pub fn working_days(start: NaiveDate, end: NaiveDate, days: &BTreeSet<WorkDay>) -> Vec<NaiveDate> {
    days_between(start, end)
        .into_iter()
        .filter(|d| days.contains(&WorkDay::from_weekday(d.weekday())))
        .collect()
}

/// The record that counts for each date: valid ones only, and among
/// duplicates the most recently created (highest id).
fn counted_records(records: &[TimePunch]) -> HashMap<NaiveDate, &TimePunch> {
    let mut by_date: HashMap<NaiveDate, &TimePunch> = HashMap::new();

    for r in records.iter().filter(|r| r.valid) {
        by_date
            .entry(r.date)
            .and_modify(|cur| {
                if r.id > cur.id {
                    *cur = r;
                }
            })
            .or_insert(r);
    }

    by_date
}

pub fn compute_summary_and_series(
    period: &Period,
    config: &WorkConfig,
    records: &[TimePunch],
) -> AppResult<(Summary, Series)> {
    let days = working_days(period.start, period.end, &config.working_days);
    let counted = counted_records(records);
    let expected = config.daily_expected_minutes;

    let mut total_worked = 0;
    let mut total_expected = 0;
    let mut accumulated = 0;
    let mut series = Series::default();

    for day in &days {
        let balance = match counted.get(day) {
            Some(r) => {
                let worked = compute_worked_minutes(&r.entry, &r.lunch_out, &r.lunch_in, &r.exit)?;
                let balance = compute_daily_balance(worked, expected);
                total_worked += worked;
                total_expected += expected;
                accumulated += balance;
                balance
            }
            None if config.count_absence_as_debit => {
                total_expected += expected;
                accumulated -= expected;
                -expected
            }
            None => 0,
        };

        series.daily.push(DailyBalance {
            date: *day,
            balance_minutes: balance,
        });
        series.accumulated.push(AccumulatedBalance {
            date: *day,
            accumulated_minutes: accumulated,
        });
    }

    let balance = total_worked - total_expected;
    let average = if days.is_empty() {
        0
    } else {
        balance.div_euclid(days.len() as i64)
    };

    let summary = Summary {
        total_worked_minutes: total_worked,
        total_expected_minutes: total_expected,
        balance_minutes: balance,
        average_per_day_minutes: average,
    };

    Ok((summary, series))
}
