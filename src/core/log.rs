use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

fn colour_for(operation: &str) -> Colour {
    match operation {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "config" => Colour::Yellow,
        "init" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the internal `log` table, oldest first.
    pub fn print_log(pool: &DbPool, separator: char) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        header("Internal log");
        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        print!("{}", render(&entries, separator));
        Ok(())
    }
}

fn render(entries: &[LogEntry], separator: char) -> String {
    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut table = Table::new(
        vec![
            Column::new("ID", id_w),
            Column::new("DATE", 25),
            Column::new("OPERATION", 17),
            Column::new("TARGET", 30),
            Column::new("MESSAGE", 0),
        ],
        separator,
    );

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.date.clone(),
            colour_for(&e.operation).paint(e.operation.as_str()).to_string(),
            truncate(&e.target, 30),
            e.message.clone(),
        ]);
    }

    table.render()
}
