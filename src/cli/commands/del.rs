use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::load_punch_by_id;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let punch = load_punch_by_id(&pool.conn, *id)?.ok_or(AppError::PunchNotFound(*id))?;
        let label = format!(
            "#{} {} {}-{} / {}-{}",
            punch.id, punch.date, punch.entry, punch.lunch_out, punch.lunch_in, punch.exit
        );

        //
        // Confirmation prompt
        //
        if !*yes && !confirm(&format!("Delete punch {}? This action is irreversible.", label)) {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&mut pool, *id)?;

        log::ttlog_quiet(&pool.conn, "del", &format!("#{}", id), &label);
        success(format!("Punch {} has been deleted.", label));
    }

    Ok(())
}
