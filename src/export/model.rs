// src/export/model.rs

use crate::core::calculator::compute_worked_minutes;
use crate::models::punch::TimePunch;
use crate::models::summary::Series;
use crate::utils::date::format_date;
use serde::Serialize;

/// Flat record row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub id: i64,
    pub date: String,
    pub entry: String,
    pub lunch_out: String,
    pub lunch_in: String,
    pub exit: String,
    pub worked_minutes: Option<i64>,
    pub note: String,
    pub valid: bool,
    pub is_holiday: bool,
}

impl From<&TimePunch> for PunchExport {
    fn from(p: &TimePunch) -> Self {
        Self {
            id: p.id,
            date: p.date_str(),
            entry: p.entry.clone(),
            lunch_out: p.lunch_out.clone(),
            lunch_in: p.lunch_in.clone(),
            exit: p.exit.clone(),
            // a malformed stored time leaves the cell empty
            worked_minutes: compute_worked_minutes(&p.entry, &p.lunch_out, &p.lunch_in, &p.exit)
                .ok(),
            note: p.note.clone().unwrap_or_default(),
            valid: p.valid,
            is_holiday: p.is_holiday,
        }
    }
}

/// One working day of the balance series.
#[derive(Serialize, Clone, Debug)]
pub struct SeriesExport {
    pub date: String,
    pub daily_balance_minutes: i64,
    pub accumulated_minutes: i64,
}

pub(crate) fn series_to_rows(series: &Series) -> Vec<SeriesExport> {
    series
        .rows()
        .map(|(date, daily, acc)| SeriesExport {
            date: format_date(&date),
            daily_balance_minutes: daily,
            accumulated_minutes: acc,
        })
        .collect()
}
