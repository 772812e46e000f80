use chrono::NaiveDate;
use serde::Serialize;

/// Period totals, all in minutes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_worked_minutes: i64,
    pub total_expected_minutes: i64,
    pub balance_minutes: i64,
    pub average_per_day_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccumulatedBalance {
    pub date: NaiveDate,
    pub accumulated_minutes: i64,
}

/// Two parallel series, one point per working day.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub daily: Vec<DailyBalance>,
    pub accumulated: Vec<AccumulatedBalance>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.daily.len()
    }

    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }

    /// Zip both series into `(date, daily, accumulated)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (NaiveDate, i64, i64)> + '_ {
        self.daily
            .iter()
            .zip(&self.accumulated)
            .map(|(d, a)| (d.date, d.balance_minutes, a.accumulated_minutes))
    }
}
