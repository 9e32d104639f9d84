use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_events_before;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use chrono::{DateTime, Days, Utc};

/// Stale-event cleanup, the scheduled counterpart of the pruning that
/// happens after every insert.
pub struct PruneLogic;

impl PruneLogic {
    /// Delete events older than `days` before `now`; returns the count.
    pub fn run(pool: &mut DbPool, days: i64, now: DateTime<Utc>) -> AppResult<usize> {
        let cutoff = now - Days::new(days.max(0) as u64);
        let deleted = delete_events_before(&pool.conn, cutoff)?;

        if deleted > 0 {
            ttlog(
                &pool.conn,
                "prune",
                "",
                &format!("Removed {} event(s) older than {} days", deleted, days),
            )?;
            success(format!(
                "Removed {} stale event(s) older than {} days.",
                deleted, days
            ));
        } else {
            info(format!("No events older than {} days.", days));
        }

        Ok(deleted)
    }
}
