#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimebank::models::punch::TimePunch;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtb() -> Command {
    cargo_bin_cmd!("rtimebank")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimebank.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `--test init` on a fresh database
pub fn init_db(db_path: &str) {
    rtb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one day through the CLI, all four times given
pub fn add_day(db_path: &str, date: &str, times: [&str; 4]) {
    rtb()
        .args([
            "--db",
            db_path,
            "add",
            date,
            "--in",
            times[0],
            "--lunch-out",
            times[1],
            "--lunch-in",
            times[2],
            "--out",
            times[3],
        ])
        .assert()
        .success();
}

/// The five sample days of the first week of October 2023.
pub const SAMPLE_WEEK: [(&str, [&str; 4]); 5] = [
    ("2023-10-02", ["08:30", "12:00", "13:30", "18:00"]),
    ("2023-10-03", ["08:25", "12:05", "13:35", "19:10"]),
    ("2023-10-04", ["08:40", "12:10", "13:40", "17:35"]),
    ("2023-10-05", ["08:30", "12:00", "13:30", "18:00"]),
    ("2023-10-06", ["08:30", "12:00", "13:30", "18:00"]),
];

pub fn init_db_with_sample_week(db_path: &str) {
    init_db(db_path);
    for (date, times) in SAMPLE_WEEK {
        add_day(db_path, date, times);
    }
}

pub fn ymd(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

/// In-memory record, as the store would return it.
pub fn punch(id: i64, date: &str, times: [&str; 4]) -> TimePunch {
    TimePunch {
        id,
        date: ymd(date),
        entry: times[0].to_string(),
        lunch_out: times[1].to_string(),
        lunch_in: times[2].to_string(),
        exit: times[3].to_string(),
        note: None,
        valid: true,
        is_holiday: false,
        created_at: "2023-10-01T00:00:00+00:00".to_string(),
    }
}

pub fn sample_week_records() -> Vec<TimePunch> {
    SAMPLE_WEEK
        .iter()
        .enumerate()
        .map(|(i, (date, times))| punch(i as i64 + 1, date, *times))
        .collect()
}
