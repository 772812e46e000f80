// src/export/logic.rs

use crate::core::period::parse_period;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::db::store::PunchStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, resolve_target};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{PunchExport, series_to_rows};
use crate::models::period::Period;
use crate::ui::messages::warning;
use crate::utils::date::{parse_date, today};
use serde::Serialize;
use std::path::Path;

/// Export of punch records and balance series.
pub struct ExportLogic;

impl ExportLogic {
    /// Export records (or, with `series`, the per-day balance series).
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None` / `"all"` for every stored date, otherwise any
    ///   period accepted by `core::period::parse_period`
    ///
    /// Returns the number of exported rows (0 means no file was written).
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        series: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = resolve_target(file)?;

        let Some(period) = resolve_range(pool, range)? else {
            warning("No punches stored yet: nothing to export.");
            return Ok(0);
        };

        if series {
            let report = SummaryLogic::build(pool, period)?;
            let rows = series_to_rows(&report.series);
            write_rows(&rows, format, &path, force)
        } else {
            let records = pool.list_punches(period.start, period.end)?;
            let rows: Vec<PunchExport> = records.iter().map(PunchExport::from).collect();
            write_rows(&rows, format, &path, force)
        }
    }
}

fn write_rows<T: Serialize>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No rows found for selected range.");
        return Ok(0);
    }

    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }

    Ok(rows.len())
}

/// `None`/"all" spans the stored dates; `Ok(None)` when the table is empty.
fn resolve_range(pool: &DbPool, range: Option<&str>) -> AppResult<Option<Period>> {
    match range {
        Some(r) if !r.eq_ignore_ascii_case("all") => Ok(Some(parse_period(r, today())?)),
        _ => {
            let st = stats::collect(pool)?;
            let first = st.first_date.as_deref().and_then(parse_date);
            let last = st.last_date.as_deref().and_then(parse_date);
            Ok(first.zip(last).map(|(s, e)| Period::custom(s, e)))
        }
    }
}
