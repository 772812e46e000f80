use crate::db::store::PunchStore;
use crate::errors::{AppError, AppResult};

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply<S: PunchStore>(store: &mut S, id: i64) -> AppResult<()> {
        if !store.delete_punch(id)? {
            return Err(AppError::PunchNotFound(id));
        }
        Ok(())
    }
}
