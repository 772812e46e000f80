use rtimebank::core::calculator::{compute_summary_and_series, working_days};
use rtimebank::models::period::Period;
use rtimebank::models::summary::Summary;
use rtimebank::models::work_config::{WorkConfig, WorkDay};
use std::collections::BTreeSet;

mod common;
use common::{punch, sample_week_records, ymd};

fn sample_week() -> Period {
    Period::custom(ymd("2023-10-02"), ymd("2023-10-06"))
}

fn totals(s: &Summary) -> (i64, i64, i64, i64) {
    (
        s.total_worked_minutes,
        s.total_expected_minutes,
        s.balance_minutes,
        s.average_per_day_minutes,
    )
}

#[test]
fn test_working_days_skip_weekend() {
    let days = working_days(
        ymd("2023-09-29"),
        ymd("2023-10-03"),
        &WorkConfig::default().working_days,
    );
    assert_eq!(days, vec![ymd("2023-09-29"), ymd("2023-10-02"), ymd("2023-10-03")]);

    let only_sat: BTreeSet<WorkDay> = [WorkDay::Sat].into_iter().collect();
    assert_eq!(
        working_days(ymd("2023-10-01"), ymd("2023-10-31"), &only_sat).len(),
        4
    );
}

#[test]
fn test_sample_week_summary() {
    let (summary, series) =
        compute_summary_and_series(&sample_week(), &WorkConfig::default(), &sample_week_records())
            .unwrap();

    // 480 + 555 + 445 + 480 + 480
    assert_eq!(totals(&summary), (2440, 2400, 40, 8));

    let daily: Vec<i64> = series.daily.iter().map(|d| d.balance_minutes).collect();
    let acc: Vec<i64> = series
        .accumulated
        .iter()
        .map(|a| a.accumulated_minutes)
        .collect();
    assert_eq!(daily, vec![0, 75, -35, 0, 0]);
    assert_eq!(acc, vec![0, 75, 40, 40, 40]);
}

#[test]
fn test_week_with_465_minute_wednesday() {
    let mut records = sample_week_records();
    records[2] = punch(3, "2023-10-04", ["08:20", "12:10", "13:40", "17:35"]);

    let (summary, series) =
        compute_summary_and_series(&sample_week(), &WorkConfig::default(), &records).unwrap();

    assert_eq!(totals(&summary), (2460, 2400, 60, 12));
    assert_eq!(series.accumulated.last().unwrap().accumulated_minutes, 60);
}

#[test]
fn test_absent_day_without_debit_is_ignored() {
    let mut records = sample_week_records();
    records.remove(2);

    let (summary, series) =
        compute_summary_and_series(&sample_week(), &WorkConfig::default(), &records).unwrap();

    assert_eq!(totals(&summary), (1995, 1920, 75, 15));
    assert_eq!(series.len(), 5);
    assert_eq!(series.daily[2].balance_minutes, 0);
}

#[test]
fn test_absent_day_with_debit() {
    let mut records = sample_week_records();
    records.remove(2);
    let cfg = WorkConfig {
        count_absence_as_debit: true,
        ..WorkConfig::default()
    };

    let (summary, series) = compute_summary_and_series(&sample_week(), &cfg, &records).unwrap();

    assert_eq!(totals(&summary), (1995, 2400, -405, -81));
    assert_eq!(series.daily[2].balance_minutes, -480);
    let acc: Vec<i64> = series
        .accumulated
        .iter()
        .map(|a| a.accumulated_minutes)
        .collect();
    assert_eq!(acc, vec![0, 75, -405, -405, -405]);

    // same week with the Wednesday worked exactly 480
    let mut full = sample_week_records();
    full[2] = punch(3, "2023-10-04", ["08:30", "12:00", "13:30", "18:00"]);
    let (full_summary, _) =
        compute_summary_and_series(&sample_week(), &WorkConfig::default(), &full).unwrap();
    assert_eq!(full_summary.balance_minutes - summary.balance_minutes, 480);
}

#[test]
fn test_average_is_floored() {
    // only Monday punched, one minute short: -1 over 5 days floors to -1
    let records = vec![punch(1, "2023-10-02", ["08:30", "12:00", "13:30", "17:59"])];
    let (summary, _) =
        compute_summary_and_series(&sample_week(), &WorkConfig::default(), &records).unwrap();
    assert_eq!(totals(&summary), (479, 480, -1, -1));
}

#[test]
fn test_invalid_and_non_working_records_are_ignored() {
    let mut records = sample_week_records();
    let mut broken = punch(10, "2023-10-02", ["09:00", "12:00", "13:00", "20:00"]);
    broken.valid = false;
    records.push(broken);
    // Saturday work is outside the working-day set
    records.push(punch(11, "2023-10-07", ["08:00", "12:00", "13:00", "17:00"]));

    let period = Period::custom(ymd("2023-10-02"), ymd("2023-10-08"));
    let (summary, series) =
        compute_summary_and_series(&period, &WorkConfig::default(), &records).unwrap();

    assert_eq!(totals(&summary), (2440, 2400, 40, 8));
    assert_eq!(series.len(), 5);
}

#[test]
fn test_duplicate_date_uses_latest_record() {
    let mut records = sample_week_records();
    // later correction of Monday: 555 minutes
    records.push(punch(20, "2023-10-02", ["08:25", "12:05", "13:35", "19:10"]));
    // an older duplicate must not win over either
    records.insert(0, punch(0, "2023-10-02", ["08:00", "09:00", "10:00", "11:00"]));

    let (summary, series) =
        compute_summary_and_series(&sample_week(), &WorkConfig::default(), &records).unwrap();

    assert_eq!(series.daily[0].balance_minutes, 75);
    assert_eq!(totals(&summary), (2515, 2400, 115, 23));
}

#[test]
fn test_empty_periods() {
    let weekend = Period::custom(ymd("2023-10-07"), ymd("2023-10-08"));
    let (summary, series) =
        compute_summary_and_series(&weekend, &WorkConfig::default(), &sample_week_records())
            .unwrap();
    assert_eq!(summary, Summary::default());
    assert!(series.is_empty());

    let reversed = Period::custom(ymd("2023-10-06"), ymd("2023-10-02"));
    let (summary, series) =
        compute_summary_and_series(&reversed, &WorkConfig::default(), &sample_week_records())
            .unwrap();
    assert_eq!(totals(&summary), (0, 0, 0, 0));
    assert!(series.is_empty());
}
