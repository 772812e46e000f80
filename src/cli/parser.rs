use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rTimebank
/// CLI punch clock: daily punches, hour bank balance, SQLite storage
#[derive(Parser)]
#[command(
    name = "rtimebank",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch clock CLI: record entry, lunch and exit times and track your hour bank using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or change the work configuration (expected minutes, working days, ...)
    Config {
        #[arg(long = "print", help = "Print the configuration file and the work configuration")]
        print_config: bool,

        #[arg(long = "daily-minutes", help = "Expected worked minutes per working day")]
        daily_minutes: Option<i64>,

        #[arg(long = "entry", help = "Default entry time (HH:MM)")]
        entry: Option<String>,

        #[arg(long = "exit", help = "Default exit time (HH:MM)")]
        exit: Option<String>,

        #[arg(long = "lunch", help = "Default lunch length in minutes")]
        lunch: Option<i64>,

        #[arg(
            long = "absence-debit",
            action = ArgAction::Set,
            value_name = "BOOL",
            help = "Count a working day without punches as a full-day debit (true/false)"
        )]
        absence_debit: Option<bool>,

        #[arg(
            long = "working-days",
            value_name = "DAYS",
            help = "Comma separated working days, e.g. mon,tue,wed,thu,fri"
        )]
        working_days: Option<String>,

        #[arg(
            long = "rounding",
            conflicts_with = "no_rounding",
            help = "Round punched times to this many minutes"
        )]
        rounding: Option<i64>,

        #[arg(long = "no-rounding", help = "Disable rounding of punched times")]
        no_rounding: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record the punches of a day
    Add {
        /// Date of the punches (YYYY-MM-DD)
        date: String,

        /// Entry time (HH:MM), defaults to the configured entry time
        #[arg(long = "in", help = "Entry time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "lunch-out", help = "Lunch start time (HH:MM)")]
        lunch_out: Option<String>,

        #[arg(long = "lunch-in", help = "Lunch return time (HH:MM)")]
        lunch_in: Option<String>,

        /// Exit time (HH:MM), defaults to the configured exit time
        #[arg(long = "out", help = "Exit time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "note", help = "Free-text note")]
        note: Option<String>,

        #[arg(long = "holiday", help = "Flag the day as a holiday (informational)")]
        holiday: bool,
    },

    /// Delete a punch record by ID
    Del {
        /// Record id (see `list`)
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List punch records
    List {
        #[arg(
            long,
            short,
            help = "today, YYYY-MM-DD, YYYY-Www, YYYY-MM, YYYY or A:B (default: current month)"
        )]
        period: Option<String>,
    },

    /// Show worked time, expected time and balance for a period
    Summary {
        #[arg(
            long,
            short,
            help = "today, YYYY-MM-DD, YYYY-Www, YYYY-MM, YYYY or A:B (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "series", short = 's', help = "Also print the per-day balance series")]
        series: bool,
    },

    /// Export punch records or the balance series
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by period (same forms as --period) or 'all'"
        )]
        range: Option<String>,

        #[arg(long, short = 's', help = "Export the per-day balance series instead of records")]
        series: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
