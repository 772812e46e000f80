use crate::core::calculator::{is_valid_punch, round_minutes};
use crate::db::store::PunchStore;
use crate::errors::{AppError, AppResult};
use crate::models::punch::{NewPunch, PunchTimes, TimePunch};
use crate::models::work_config::WorkConfig;
use crate::utils::time::{MINUTES_PER_DAY, minutes_to_time, shift_time, time_to_minutes};
use chrono::NaiveDate;

/// What the user typed for `add`; every time is optional.
#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub entry: Option<String>,
    pub lunch_out: Option<String>,
    pub lunch_in: Option<String>,
    pub exit: Option<String>,
    pub note: Option<String>,
    pub is_holiday: bool,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Fill the missing times from the configured defaults.
    ///
    /// Entry and exit fall back to the default times; a single lunch
    /// boundary is completed with the default lunch length.
    pub fn prefill(req: &AddRequest, cfg: &WorkConfig) -> AppResult<PunchTimes> {
        let entry = req
            .entry
            .clone()
            .unwrap_or_else(|| cfg.default_entry_time.clone());
        let exit = req
            .exit
            .clone()
            .unwrap_or_else(|| cfg.default_exit_time.clone());

        let (lunch_out, lunch_in) = match (&req.lunch_out, &req.lunch_in) {
            (Some(lo), Some(li)) => (lo.clone(), li.clone()),
            (Some(lo), None) => (lo.clone(), shift_time(lo, cfg.default_lunch_minutes)?),
            (None, Some(li)) => (
                shift_time(li, cfg.default_lunch_minutes.saturating_neg())?,
                li.clone(),
            ),
            (None, None) => return Err(AppError::MissingLunch),
        };

        Ok(PunchTimes {
            entry,
            lunch_out,
            lunch_in,
            exit,
        })
    }

    /// Round every parseable time to the configured granularity.
    /// Unparseable times are left for validation to reject. A time that
    /// would round past midnight takes the last multiple within the day.
    pub fn normalize(times: PunchTimes, granularity: Option<i64>) -> PunchTimes {
        let round = |t: String| match time_to_minutes(&t) {
            Ok(m) => {
                let mut r = round_minutes(m, granularity);
                if r >= MINUTES_PER_DAY {
                    r = granularity.map_or(m, |g| m - m.rem_euclid(g));
                }
                minutes_to_time(r)
            }
            Err(_) => t,
        };

        PunchTimes {
            entry: round(times.entry),
            lunch_out: round(times.lunch_out),
            lunch_in: round(times.lunch_in),
            exit: round(times.exit),
        }
    }

    /// Build, validate and persist a punch.
    ///
    /// Returns `Ok(None)` when the candidate fails validation: nothing is
    /// stored and telling the user is up to the caller.
    pub fn apply<S: PunchStore>(
        store: &mut S,
        date: NaiveDate,
        req: &AddRequest,
        cfg: &WorkConfig,
    ) -> AppResult<Option<TimePunch>> {
        let times = Self::normalize(Self::prefill(req, cfg)?, cfg.rounding_minutes);

        if !is_valid_punch(&times) {
            return Ok(None);
        }

        // One counted record per date: corrections are delete + re-create
        if store.list_punches(date, date)?.iter().any(|p| p.valid) {
            return Err(AppError::DuplicatePunch(date.to_string()));
        }

        let punch = store.create_punch(&NewPunch {
            date,
            times,
            note: req.note.clone().filter(|n| !n.trim().is_empty()),
            is_holiday: req.is_holiday,
        })?;

        Ok(Some(punch))
    }
}
