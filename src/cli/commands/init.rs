use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database file
///  - all pending DB migrations, including the default work configuration
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing rTimebank…");
    info(format!("Database   : {}", &cfg.database));

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized at {}", &cfg.database));

    log::ttlog_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    );

    Ok(())
}
