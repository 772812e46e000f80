use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::{ConfigLogic, WorkConfigUpdate};
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::store::ConfigStore;
use crate::errors::AppResult;
use crate::models::work_config::{WorkConfig, parse_work_days};
use crate::ui::messages::{header, info, success};
use crate::utils::formatting::{bold, mins2readable};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        daily_minutes,
        entry,
        exit,
        lunch,
        absence_debit,
        working_days,
        rounding,
        no_rounding,
    } = cmd
    {
        let update = WorkConfigUpdate {
            daily_expected_minutes: *daily_minutes,
            default_entry_time: entry.clone(),
            default_exit_time: exit.clone(),
            default_lunch_minutes: *lunch,
            count_absence_as_debit: *absence_debit,
            working_days: working_days.as_deref().map(parse_work_days).transpose()?,
            rounding_minutes: if *no_rounding {
                Some(None)
            } else {
                rounding.map(Some)
            },
        };

        let mut pool = DbPool::open_initialized(&cfg.database)?;

        if !update.is_empty() {
            let new_cfg = ConfigLogic::apply(&mut pool, update)?;
            log::ttlog_quiet(
                &pool.conn,
                "config",
                "work_config",
                &format!(
                    "daily={} absence_debit={} days={} rounding={:?}",
                    new_cfg.daily_expected_minutes,
                    new_cfg.count_absence_as_debit,
                    new_cfg.working_days_label(),
                    new_cfg.rounding_minutes
                ),
            );
            success("Work configuration updated.");
            print_work_config(&new_cfg);
        } else if *print_config {
            header("Configuration file");
            info(format!("Path: {}", Config::config_file().display()));
            println!("{}", serde_yaml::to_string(cfg)?);

            print_work_config(&pool.get_config()?);
        } else {
            info("Nothing to do: use --print or one of the setting flags (see --help).");
        }
    }

    Ok(())
}

fn print_work_config(wc: &WorkConfig) {
    header("Work configuration");
    println!(
        "{} {} ({} min)",
        bold("Expected per day:"),
        mins2readable(wc.daily_expected_minutes, false),
        wc.daily_expected_minutes
    );
    println!(
        "{} {} → {}, lunch {} min",
        bold("Default times:   "),
        wc.default_entry_time,
        wc.default_exit_time,
        wc.default_lunch_minutes
    );
    println!("{} {}", bold("Working days:    "), wc.working_days_label());
    println!(
        "{} {}",
        bold("Absence debit:   "),
        if wc.count_absence_as_debit { "yes" } else { "no" }
    );
    println!(
        "{} {}",
        bold("Rounding:        "),
        wc.rounding_minutes
            .map(|g| format!("{} min", g))
            .unwrap_or_else(|| "none".to_string())
    );
}
