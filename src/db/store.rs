//! Storage interfaces consumed by the core logic, and their SQLite
//! implementation on `DbPool`.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::punch::{NewPunch, TimePunch};
use crate::models::work_config::WorkConfig;
use chrono::NaiveDate;

/// CRUD over punch records keyed by date.
pub trait PunchStore {
    /// Records with `start <= date <= end`, ordered by date.
    fn list_punches(&mut self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<TimePunch>>;

    /// Persist a candidate and return it with its assigned id.
    fn create_punch(&mut self, punch: &NewPunch) -> AppResult<TimePunch>;

    /// Returns `false` when no record had that id.
    fn delete_punch(&mut self, id: i64) -> AppResult<bool>;
}

/// Read / full replace of the singleton work configuration.
pub trait ConfigStore {
    fn get_config(&mut self) -> AppResult<WorkConfig>;
    fn set_config(&mut self, cfg: &WorkConfig) -> AppResult<()>;
}

impl PunchStore for DbPool {
    fn list_punches(&mut self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<TimePunch>> {
        queries::load_punches_between(&self.conn, &start, &end)
    }

    fn create_punch(&mut self, punch: &NewPunch) -> AppResult<TimePunch> {
        queries::insert_punch(&self.conn, punch)
    }

    fn delete_punch(&mut self, id: i64) -> AppResult<bool> {
        Ok(queries::delete_punch(&self.conn, id)? > 0)
    }
}

impl ConfigStore for DbPool {
    fn get_config(&mut self) -> AppResult<WorkConfig> {
        queries::load_work_config(&self.conn)
    }

    fn set_config(&mut self, cfg: &WorkConfig) -> AppResult<()> {
        queries::save_work_config(&self.conn, cfg)
    }
}
