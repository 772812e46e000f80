use rtimebank::core::period::{default_period, parse_period};
use rtimebank::errors::AppError;
use rtimebank::models::period::PeriodKind;

mod common;
use common::ymd;

fn today() -> chrono::NaiveDate {
    ymd("2025-11-18")
}

#[test]
fn test_default_period_is_month_to_date() {
    let p = default_period(today());
    assert_eq!(p.kind, PeriodKind::Month);
    assert_eq!(p.start, ymd("2025-11-01"));
    assert_eq!(p.end, ymd("2025-11-18"));
}

#[test]
fn test_parse_single_periods() {
    let p = parse_period("today", today()).unwrap();
    assert_eq!((p.kind, p.start, p.end), (PeriodKind::Day, today(), today()));

    let p = parse_period("2025-09-15", today()).unwrap();
    assert_eq!((p.start, p.end), (ymd("2025-09-15"), ymd("2025-09-15")));

    let p = parse_period("2024-02", today()).unwrap();
    assert_eq!(p.kind, PeriodKind::Month);
    assert_eq!((p.start, p.end), (ymd("2024-02-01"), ymd("2024-02-29")));

    let p = parse_period("2025", today()).unwrap();
    assert_eq!(p.kind, PeriodKind::Year);
    assert_eq!((p.start, p.end), (ymd("2025-01-01"), ymd("2025-12-31")));
}

#[test]
fn test_parse_iso_week() {
    // ISO week 1 of 2025 starts on Monday 2024-12-30
    let p = parse_period("2025-W01", today()).unwrap();
    assert_eq!(p.kind, PeriodKind::Week);
    assert_eq!((p.start, p.end), (ymd("2024-12-30"), ymd("2025-01-05")));

    let p = parse_period("2023-W40", today()).unwrap();
    assert_eq!((p.start, p.end), (ymd("2023-10-02"), ymd("2023-10-08")));

    assert!(parse_period("2025-W60", today()).is_err());
}

#[test]
fn test_parse_custom_range() {
    let p = parse_period("2025-09:2025-10", today()).unwrap();
    assert_eq!(p.kind, PeriodKind::Custom);
    assert_eq!((p.start, p.end), (ymd("2025-09-01"), ymd("2025-10-31")));

    let p = parse_period("2023-10-02:2023-10-06", today()).unwrap();
    assert_eq!((p.start, p.end), (ymd("2023-10-02"), ymd("2023-10-06")));
}

#[test]
fn test_parse_period_errors() {
    for bad in ["2025-09:2025", "2025-13", "2025-02-30", "yesterday", "25-09", ""] {
        assert!(
            matches!(parse_period(bad, today()), Err(AppError::InvalidPeriod(_))),
            "{bad:?} should be rejected"
        );
    }
}
