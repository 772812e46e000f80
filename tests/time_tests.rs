use rtimebank::core::calculator::{
    compute_daily_balance, compute_worked_minutes, is_valid_punch, round_minutes,
};
use rtimebank::errors::AppError;
use rtimebank::models::punch::PunchTimes;
use rtimebank::utils::time::{format_balance, minutes_to_time, shift_time, time_to_minutes};

#[test]
fn test_time_to_minutes() {
    assert_eq!(time_to_minutes("08:30").unwrap(), 510);
    assert_eq!(time_to_minutes("18:00").unwrap(), 1080);
    assert_eq!(time_to_minutes("00:00").unwrap(), 0);
    assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    assert_eq!(time_to_minutes("8:30").unwrap(), 510);
    assert_eq!(time_to_minutes(" 08:30 ").unwrap(), 510);
}

#[test]
fn test_time_to_minutes_rejects_malformed() {
    for bad in ["", "abc", "24:00", "12:60", "8:5", "08h30", "08:30:00", "-1:00"] {
        assert!(
            matches!(time_to_minutes(bad), Err(AppError::InvalidTime(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_minutes_to_time() {
    assert_eq!(minutes_to_time(510), "08:30");
    assert_eq!(minutes_to_time(0), "00:00");
    assert_eq!(minutes_to_time(1500), "25:00");
    assert_eq!(minutes_to_time(-75), "-01:15");
}

#[test]
fn test_every_clock_time_survives_conversion() {
    for m in 0..24 * 60 {
        assert_eq!(time_to_minutes(&minutes_to_time(m)).unwrap(), m);
    }
}

#[test]
fn test_format_balance_sign() {
    assert_eq!(format_balance(75), "+01:15");
    assert_eq!(format_balance(-40), "-00:40");
    assert_eq!(format_balance(0), "00:00");
}

#[test]
fn test_shift_time_stays_within_day() {
    assert_eq!(shift_time("12:00", 90).unwrap(), "13:30");
    assert_eq!(shift_time("13:30", -90).unwrap(), "12:00");
    assert!(shift_time("23:00", 90).is_err());
    assert!(shift_time("00:30", -60).is_err());
}

#[test]
fn test_shift_time_huge_delta_is_an_error() {
    assert!(matches!(
        shift_time("12:00", i64::MAX),
        Err(AppError::InvalidTime(_))
    ));
    assert!(matches!(
        shift_time("12:00", i64::MIN),
        Err(AppError::InvalidTime(_))
    ));
}

#[test]
fn test_compute_worked_minutes() {
    assert_eq!(
        compute_worked_minutes("08:30", "12:00", "13:30", "18:00").unwrap(),
        480
    );
    assert_eq!(
        compute_worked_minutes("08:25", "12:05", "13:35", "19:10").unwrap(),
        555
    );
    assert_eq!(
        compute_worked_minutes("08:40", "12:10", "13:40", "17:35").unwrap(),
        445
    );
    assert!(compute_worked_minutes("08:30", "xx", "13:30", "18:00").is_err());
}

#[test]
fn test_compute_daily_balance() {
    assert_eq!(compute_daily_balance(480, 480), 0);
    assert_eq!(compute_daily_balance(555, 480), 75);
    assert_eq!(compute_daily_balance(445, 480), -35);
}

#[test]
fn test_is_valid_punch() {
    assert!(is_valid_punch(&PunchTimes::new("08:30", "12:00", "13:30", "18:00")));
    assert!(!is_valid_punch(&PunchTimes::new("18:00", "12:00", "13:30", "08:00")));
}

#[test]
fn test_is_valid_punch_boundaries() {
    // zero-length lunch is fine
    assert!(is_valid_punch(&PunchTimes::new("08:00", "12:00", "12:00", "17:00")));
    // strict at both ends
    assert!(!is_valid_punch(&PunchTimes::new("12:00", "12:00", "13:00", "17:00")));
    assert!(!is_valid_punch(&PunchTimes::new("08:00", "12:00", "17:00", "17:00")));
    // lunch back before lunch out
    assert!(!is_valid_punch(&PunchTimes::new("08:00", "13:00", "12:00", "17:00")));
    // unparseable never errors, just invalid
    assert!(!is_valid_punch(&PunchTimes::new("8h", "12:00", "13:00", "17:00")));
    assert!(!is_valid_punch(&PunchTimes::new("08:00", "12:00", "13:00", "")));
}

#[test]
fn test_round_minutes() {
    assert_eq!(round_minutes(62, Some(5)), 60);
    assert_eq!(round_minutes(63, Some(5)), 65);
    assert_eq!(round_minutes(62, None), 62);
    assert_eq!(round_minutes(62, Some(0)), 62);
    assert_eq!(round_minutes(62, Some(-5)), 62);
    assert_eq!(round_minutes(7, Some(15)), 0);
    assert_eq!(round_minutes(8, Some(15)), 15);
    assert_eq!(round_minutes(510, Some(15)), 510);
}

#[test]
fn test_round_minutes_ties_go_up() {
    assert_eq!(round_minutes(5, Some(10)), 10);
    assert_eq!(round_minutes(-5, Some(10)), 0);
    assert_eq!(round_minutes(2, Some(4)), 4);
    assert_eq!(round_minutes(15, Some(30)), 30);
    assert_eq!(round_minutes(-15, Some(30)), 0);
}

#[test]
fn test_round_minutes_extreme_values() {
    assert_eq!(round_minutes(-1, Some(i64::MAX)), 0);
    assert_eq!(round_minutes(i64::MAX - 1, Some(i64::MAX)), i64::MAX);
    assert_eq!(round_minutes(i64::MIN, Some(i64::MAX)), -i64::MAX);
    // upper multiple overflows, fall back to the lower one
    assert_eq!(round_minutes(i64::MAX, Some(10)), i64::MAX - 7);
    // lower multiple overflows, fall back to the upper one
    assert_eq!(round_minutes(i64::MIN, Some(10)), i64::MIN + 8);
    for g in [i64::MAX, i64::MAX / 2 + 1, 1 << 40] {
        for m in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!(round_minutes(m, Some(g)).rem_euclid(g), 0, "m={m} g={g}");
        }
    }
}

#[test]
fn test_round_minutes_is_multiple_of_granularity() {
    for g in 1..=30 {
        for m in -200..=2000 {
            let r = round_minutes(m, Some(g));
            assert_eq!(r.rem_euclid(g), 0, "round_minutes({m}, {g}) = {r}");
            assert!((r - m).abs() * 2 <= g, "round_minutes({m}, {g}) = {r}");
        }
    }
}
