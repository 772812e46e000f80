use super::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{PeriodReport, SummaryLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_balance;
use crate::utils::date::format_date;
use crate::utils::formatting::{bold, mins2readable};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period, series } = cmd {
        let period = resolve_period(period)?;

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let report = SummaryLogic::build(&mut pool, period)?;

        print_summary(&report);

        if *series {
            print_series(&report, cfg.separator());
        }
    }
    Ok(())
}

fn print_summary(report: &PeriodReport) {
    let s = &report.summary;

    header(format!("Summary – {}", report.period));
    println!(
        "{} {}   {} {}",
        bold("Working days:"),
        report.series.len(),
        bold("Records:"),
        report.records.len()
    );
    println!(
        "{} {}",
        bold("Worked:      "),
        mins2readable(s.total_worked_minutes, false)
    );
    println!(
        "{} {}",
        bold("Expected:    "),
        mins2readable(s.total_expected_minutes, false)
    );
    println!("{} {}", bold("Balance:     "), colorize_balance(s.balance_minutes));
    println!(
        "{} {}",
        bold("Avg per day: "),
        colorize_balance(s.average_per_day_minutes)
    );
}

fn print_series(report: &PeriodReport, separator: char) {
    if report.series.is_empty() {
        info("No working days in this period.");
        return;
    }

    let mut table = Table::new(
        vec![
            Column::new("DATE", 10),
            Column::new("DAY", 3),
            Column::new("DAILY", 7),
            Column::new("ACCUMULATED", 11),
        ],
        separator,
    );

    for (date, daily, acc) in report.series.rows() {
        table.add_row(vec![
            format_date(&date),
            date.format("%a").to_string(),
            colorize_balance(daily),
            colorize_balance(acc),
        ]);
    }

    println!();
    print!("{}", table.render());
}
