use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AddRequest};
use crate::core::calculator::compute_worked_minutes;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::store::ConfigStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::mins2readable;

/// Record the punches of one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        lunch_out,
        lunch_in,
        end,
        note,
        holiday,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let req = AddRequest {
            entry: start.clone(),
            lunch_out: lunch_out.clone(),
            lunch_in: lunch_in.clone(),
            exit: end.clone(),
            note: note.clone(),
            is_holiday: *holiday,
        };

        //
        // 2. Open DB and read the work configuration (defaults, rounding)
        //
        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let work_cfg = pool.get_config()?;

        //
        // 3. Execute logic
        //
        let Some(punch) = AddLogic::apply(&mut pool, d, &req, &work_cfg)? else {
            let times = AddLogic::normalize(
                AddLogic::prefill(&req, &work_cfg)?,
                work_cfg.rounding_minutes,
            );
            warning("Punches must satisfy entry < lunch-out <= lunch-in < exit.");
            return Err(AppError::InvalidPunch(format!(
                "{} {} {} {} {}",
                d, times.entry, times.lunch_out, times.lunch_in, times.exit
            )));
        };

        let worked =
            compute_worked_minutes(&punch.entry, &punch.lunch_out, &punch.lunch_in, &punch.exit)?;

        let summary = format!(
            "{} {}-{} / {}-{} ({})",
            punch.date,
            punch.entry,
            punch.lunch_out,
            punch.lunch_in,
            punch.exit,
            mins2readable(worked, false)
        );

        log::ttlog_quiet(&pool.conn, "add", &format!("#{}", punch.id), &summary);
        success(format!("Saved punch #{}: {}", punch.id, summary));
    }

    Ok(())
}
