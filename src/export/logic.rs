use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::MealExport;
use crate::ui::messages::warning;
use crate::utils::date::{day_bounds_utc, parse_period};
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export meal events.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a period expression:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - ranges of the above as `start:end`
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let events = match range {
            None => crate::db::queries::load_all_events(pool)?,
            Some(r) if r.eq_ignore_ascii_case("all") => {
                crate::db::queries::load_all_events(pool)?
            }
            Some(r) => {
                let (start_day, end_day) = parse_period(r).map_err(AppError::Export)?;
                let (start, _) = day_bounds_utc(start_day);
                let (_, end) = day_bounds_utc(end_day);
                crate::db::queries::load_events_between(&pool.conn, start, end)?
            }
        };

        if events.is_empty() {
            warning("No meal events found for selected range.");
            return Ok(());
        }

        let rows: Vec<MealExport> = events.iter().map(MealExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
