use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    Month,
    Year,
    Custom,
}

impl PeriodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Day => "day",
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
            PeriodKind::Year => "year",
            PeriodKind::Custom => "custom",
        }
    }
}

/// A reporting window: `start..=end` plus how it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub kind: PeriodKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(kind: PeriodKind, start: NaiveDate, end: NaiveDate) -> Self {
        Self { kind, start, end }
    }

    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(PeriodKind::Custom, start, end)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{} {}", self.kind.as_str(), self.start)
        } else {
            write!(f, "{} {} → {}", self.kind.as_str(), self.start, self.end)
        }
    }
}
