use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, delete_events_between};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date::day_bounds_utc;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single event by id.
    pub fn by_id(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let deleted = delete_event(pool, id)?;
        if deleted == 0 {
            return Err(AppError::UnknownEvent(id));
        }

        ttlog(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Deleted meal event {}", id),
        )?;
        info(format!("Deleted meal event {}", id));
        Ok(())
    }

    /// Delete every event of one calendar day (UTC).
    pub fn by_date(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        let (start, end) = day_bounds_utc(date);
        let deleted = delete_events_between(&pool.conn, start, end)?;

        if deleted == 0 {
            return Err(AppError::NoEventsForDate(date.to_string()));
        }

        ttlog(
            &pool.conn,
            "del",
            &date.to_string(),
            &format!("Deleted {} meal event(s) for {}", deleted, date),
        )?;
        info(format!("Deleted {} meal event(s) for {}", deleted, date));
        Ok(())
    }
}
