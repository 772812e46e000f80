use crate::db::store::ConfigStore;
use crate::errors::{AppError, AppResult};
use crate::models::work_config::{WorkConfig, WorkDay};
use crate::utils::time::{MINUTES_PER_DAY, time_to_minutes};
use std::collections::BTreeSet;

/// Requested changes; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct WorkConfigUpdate {
    pub daily_expected_minutes: Option<i64>,
    pub default_entry_time: Option<String>,
    pub default_exit_time: Option<String>,
    pub default_lunch_minutes: Option<i64>,
    pub count_absence_as_debit: Option<bool>,
    pub working_days: Option<BTreeSet<WorkDay>>,
    /// `Some(None)` clears rounding.
    pub rounding_minutes: Option<Option<i64>>,
}

impl WorkConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.daily_expected_minutes.is_none()
            && self.default_entry_time.is_none()
            && self.default_exit_time.is_none()
            && self.default_lunch_minutes.is_none()
            && self.count_absence_as_debit.is_none()
            && self.working_days.is_none()
            && self.rounding_minutes.is_none()
    }
}

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn check(cfg: &WorkConfig) -> AppResult<()> {
        if !(0..=MINUTES_PER_DAY).contains(&cfg.daily_expected_minutes) {
            return Err(AppError::Config(format!(
                "daily expected minutes must be between 0 and {}, got {}",
                MINUTES_PER_DAY, cfg.daily_expected_minutes
            )));
        }
        if !(0..=MINUTES_PER_DAY).contains(&cfg.default_lunch_minutes) {
            return Err(AppError::Config(format!(
                "default lunch minutes must be between 0 and {}, got {}",
                MINUTES_PER_DAY, cfg.default_lunch_minutes
            )));
        }
        time_to_minutes(&cfg.default_entry_time)?;
        time_to_minutes(&cfg.default_exit_time)?;

        if let Some(g) = cfg.rounding_minutes
            && g <= 0
        {
            return Err(AppError::Config(format!(
                "rounding must be a positive number of minutes, got {}",
                g
            )));
        }
        Ok(())
    }

    /// Read the current configuration, merge the update and write it back
    /// as a full replacement.
    pub fn apply<S: ConfigStore>(store: &mut S, update: WorkConfigUpdate) -> AppResult<WorkConfig> {
        let mut cfg = store.get_config()?;

        if let Some(v) = update.daily_expected_minutes {
            cfg.daily_expected_minutes = v;
        }
        if let Some(v) = update.default_entry_time {
            cfg.default_entry_time = v;
        }
        if let Some(v) = update.default_exit_time {
            cfg.default_exit_time = v;
        }
        if let Some(v) = update.default_lunch_minutes {
            cfg.default_lunch_minutes = v;
        }
        if let Some(v) = update.count_absence_as_debit {
            cfg.count_absence_as_debit = v;
        }
        if let Some(v) = update.working_days {
            cfg.working_days = v;
        }
        if let Some(v) = update.rounding_minutes {
            cfg.rounding_minutes = v;
        }

        Self::check(&cfg)?;
        store.set_config(&cfg)?;
        Ok(cfg)
    }
}
