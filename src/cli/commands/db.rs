use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

/// Database maintenance; flags run in the order migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    if !(*migrate || *check || *vacuum || *show_info) {
        info("Nothing to do: use --migrate, --check, --vacuum or --info.");
        return Ok(());
    }

    if *migrate {
        info("Running migrations…");
        let applied = run_pending_migrations(&pool.conn)?;
        success(format!("Migration completed ({} applied).", applied));
    }

    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        integrity_check(&pool)?;
    }

    if *vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}

fn integrity_check(pool: &DbPool) -> AppResult<()> {
    info("Running integrity check…");

    // one row "ok", or one row per problem found
    let mut stmt = pool.conn.prepare("PRAGMA integrity_check;")?;
    let problems: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<_, _>>()?;

    if problems.len() == 1 && problems[0] == "ok" {
        success("Integrity check passed.");
    } else {
        error(format!("Integrity check failed: {}", problems.join("; ")));
    }
    Ok(())
}
