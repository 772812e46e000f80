use crate::utils::date::format_date;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// The four time-of-day punches of one working day, as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PunchTimes {
    pub entry: String,
    pub lunch_out: String,
    pub lunch_in: String,
    pub exit: String,
}

impl PunchTimes {
    pub fn new(entry: &str, lunch_out: &str, lunch_in: &str, exit: &str) -> Self {
        Self {
            entry: entry.to_string(),
            lunch_out: lunch_out.to_string(),
            lunch_in: lunch_in.to_string(),
            exit: exit.to_string(),
        }
    }
}

/// A candidate record, before the store assigns it an id.
#[derive(Debug, Clone)]
pub struct NewPunch {
    pub date: NaiveDate,
    pub times: PunchTimes,
    pub note: Option<String>,
    pub is_holiday: bool,
}

/// A stored punch record (one row of the `punches` table).
#[derive(Debug, Clone, Serialize)]
pub struct TimePunch {
    pub id: i64,
    pub date: NaiveDate,    // ⇔ punches.date (TEXT "YYYY-MM-DD")
    pub entry: String,      // ⇔ punches.entry (TEXT "HH:MM")
    pub lunch_out: String,  // ⇔ punches.lunch_out
    pub lunch_in: String,   // ⇔ punches.lunch_in
    pub exit: String,       // ⇔ punches.exit
    pub note: Option<String>,
    pub valid: bool,        // ⇔ punches.valid (INT, default 1)
    pub is_holiday: bool,   // ⇔ punches.is_holiday (INT, default 0), informational
    pub created_at: String, // ⇔ punches.created_at (TEXT, RFC 3339)
}

impl TimePunch {
    /// Materialize a candidate as it will be stored: valid, stamped now.
    pub fn from_new(id: i64, p: &NewPunch) -> Self {
        Self {
            id,
            date: p.date,
            entry: p.times.entry.clone(),
            lunch_out: p.times.lunch_out.clone(),
            lunch_in: p.times.lunch_in.clone(),
            exit: p.times.exit.clone(),
            note: p.note.clone(),
            valid: true,
            is_holiday: p.is_holiday,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        format_date(&self.date)
    }
}
