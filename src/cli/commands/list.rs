use super::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{compute_daily_balance, compute_worked_minutes};
use crate::db::pool::DbPool;
use crate::db::store::{ConfigStore, PunchStore};
use crate::errors::AppResult;
use crate::models::punch::TimePunch;
use crate::models::work_config::WorkConfig;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_balance, colorize_validity};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use crate::utils::time::minutes_to_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let period = resolve_period(period)?;

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let work_cfg = pool.get_config()?;
        let records = pool.list_punches(period.start, period.end)?;

        header(format!("Punches – {}", period));

        if records.is_empty() {
            info(format!("No punches between {} and {}.", period.start, period.end));
            return Ok(());
        }

        print!("{}", render_records(&records, &work_cfg, cfg.separator()));
    }
    Ok(())
}

fn render_records(records: &[TimePunch], work_cfg: &WorkConfig, separator: char) -> String {
    let mut table = Table::new(
        vec![
            Column::new("ID", 5),
            Column::new("DATE", 10),
            Column::new("DAY", 3),
            Column::new("IN", 5),
            Column::new("L-OUT", 5),
            Column::new("L-IN", 5),
            Column::new("OUT", 5),
            Column::new("WORKED", 6),
            Column::new("BALANCE", 7),
            Column::new("VALID", 5),
            Column::new("NOTE", 30),
        ],
        separator,
    );

    for r in records {
        let (worked, balance) =
            match compute_worked_minutes(&r.entry, &r.lunch_out, &r.lunch_in, &r.exit) {
                Ok(w) => (
                    minutes_to_time(w),
                    colorize_balance(compute_daily_balance(w, work_cfg.daily_expected_minutes)),
                ),
                Err(_) => ("--:--".to_string(), "--:--".to_string()),
            };

        let mut note = r.note.clone().unwrap_or_default();
        if r.is_holiday {
            note = format!("[holiday] {}", note);
        }

        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            r.date.format("%a").to_string(),
            r.entry.clone(),
            r.lunch_out.clone(),
            r.lunch_in.clone(),
            r.exit.clone(),
            worked,
            balance,
            colorize_validity(r.valid),
            truncate(note.trim(), 30),
        ]);
    }

    table.render()
}
