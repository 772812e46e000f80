use crate::core::calculator::compute_summary_and_series;
use crate::db::store::{ConfigStore, PunchStore};
use crate::errors::AppResult;
use crate::models::period::Period;
use crate::models::punch::TimePunch;
use crate::models::summary::{Series, Summary};
use crate::models::work_config::WorkConfig;

/// Everything a report needs for one period.
#[derive(Debug, Clone)]
pub struct PeriodReport {
    pub period: Period,
    pub config: WorkConfig,
    pub records: Vec<TimePunch>,
    pub summary: Summary,
    pub series: Series,
}

pub struct SummaryLogic;

impl SummaryLogic {
    /// Load the configuration and the records of `period`, then aggregate.
    pub fn build<S: PunchStore + ConfigStore>(
        store: &mut S,
        period: Period,
    ) -> AppResult<PeriodReport> {
        let config = store.get_config()?;
        let records = store.list_punches(period.start, period.end)?;
        let (summary, series) = compute_summary_and_series(&period, &config, &records)?;

        Ok(PeriodReport {
            period,
            config,
            records,
            summary,
            series,
        })
    }
}
