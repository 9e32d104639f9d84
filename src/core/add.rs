use crate::config::Config;
use crate::core::calculator::compute_elapsed;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_events_before, insert_meal_event, last_event};
use crate::errors::{AppError, AppResult};
use crate::models::meal_event::MealEvent;
use crate::ui::messages::success;
use crate::utils::formatting::elapsed_prose;
use chrono::{DateTime, Days, Utc};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Record a meal event and prune anything past the retention
    /// horizon, mirroring what happens on every insert.
    ///
    /// Unless `force` is set, recording is refused when the previous
    /// meal is closer than the first reminder threshold.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        carb_servings: u32,
        time: DateTime<Utc>,
        force: bool,
    ) -> AppResult<()> {
        //
        // 1. Meal spacing guard
        //
        if let Some(previous) = last_event(&pool.conn)?
            && !force
        {
            let elapsed = compute_elapsed(previous.time, time);
            if elapsed.hours < cfg.first_reminder_hours {
                return Err(AppError::TooSoon(elapsed_prose(
                    elapsed.hours,
                    elapsed.minutes,
                )));
            }
        }

        //
        // 2. Insert
        //
        let ev = MealEvent::new(time, carb_servings);
        let id = insert_meal_event(&pool.conn, &ev)?;

        ttlog(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("Recorded {} carb servings at {}", carb_servings, ev.time_str()),
        )?;

        success(format!(
            "Recorded {} carb serving{} at {}",
            carb_servings,
            if carb_servings == 1 { "" } else { "s" },
            ev.time_str()
        ));

        //
        // 3. Retention pruning
        //
        let cutoff = time - Days::new(cfg.retention_days.max(0) as u64);
        let pruned = delete_events_before(&pool.conn, cutoff)?;
        if pruned > 0 {
            ttlog(
                &pool.conn,
                "prune",
                "",
                &format!(
                    "Removed {} event(s) older than {} days",
                    pruned, cfg.retention_days
                ),
            )?;
        }

        Ok(())
    }
}
