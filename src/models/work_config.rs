use crate::errors::{AppError, AppResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A weekday as stored in the working-day set ("mon", "tue", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WorkDay {
    pub fn code(&self) -> &'static str {
        match self {
            WorkDay::Mon => "mon",
            WorkDay::Tue => "tue",
            WorkDay::Wed => "wed",
            WorkDay::Thu => "thu",
            WorkDay::Fri => "fri",
            WorkDay::Sat => "sat",
            WorkDay::Sun => "sun",
        }
    }

    /// Accepts abbreviations or full English names, any case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "mon" | "monday" => Some(WorkDay::Mon),
            "tue" | "tuesday" => Some(WorkDay::Tue),
            "wed" | "wednesday" => Some(WorkDay::Wed),
            "thu" | "thursday" => Some(WorkDay::Thu),
            "fri" | "friday" => Some(WorkDay::Fri),
            "sat" | "saturday" => Some(WorkDay::Sat),
            "sun" | "sunday" => Some(WorkDay::Sun),
            _ => None,
        }
    }

    pub fn from_weekday(wd: Weekday) -> Self {
        match wd {
            Weekday::Mon => WorkDay::Mon,
            Weekday::Tue => WorkDay::Tue,
            Weekday::Wed => WorkDay::Wed,
            Weekday::Thu => WorkDay::Thu,
            Weekday::Fri => WorkDay::Fri,
            Weekday::Sat => WorkDay::Sat,
            Weekday::Sun => WorkDay::Sun,
        }
    }
}

impl fmt::Display for WorkDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parse a comma separated list such as `mon,tue,wed`.
pub fn parse_work_days(list: &str) -> AppResult<BTreeSet<WorkDay>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| WorkDay::from_code(s).ok_or_else(|| AppError::InvalidWeekday(s.trim().into())))
        .collect()
}

/// The single active work configuration (row `id = 1` of `work_config`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkConfig {
    pub daily_expected_minutes: i64,
    pub default_entry_time: String,
    pub default_exit_time: String,
    pub default_lunch_minutes: i64,
    pub count_absence_as_debit: bool,
    pub working_days: BTreeSet<WorkDay>,
    pub rounding_minutes: Option<i64>,
}

impl Default for WorkConfig {
    fn default() -> Self {
        Self {
            daily_expected_minutes: 480,
            default_entry_time: "08:30".to_string(),
            default_exit_time: "18:00".to_string(),
            default_lunch_minutes: 90,
            count_absence_as_debit: false,
            working_days: [
                WorkDay::Mon,
                WorkDay::Tue,
                WorkDay::Wed,
                WorkDay::Thu,
                WorkDay::Fri,
            ]
            .into_iter()
            .collect(),
            rounding_minutes: None,
        }
    }
}

impl WorkConfig {
    /// JSON text stored in `work_config.working_days`.
    pub fn working_days_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.working_days)?)
    }

    pub fn working_days_label(&self) -> String {
        self.working_days
            .iter()
            .map(WorkDay::code)
            .collect::<Vec<_>>()
            .join(",")
    }
}
