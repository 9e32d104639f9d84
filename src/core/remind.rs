use crate::config::Config;
use crate::core::calculator::compute_elapsed;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{last_event, update_reminder_state};
use crate::errors::AppResult;
use crate::models::reminder_state::ReminderState;
use crate::ui::messages::notify;
use chrono::{DateTime, Utc};

/// Which reminder a pass emitted, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    SafeToEat,
    TimeToEat,
}

/// One reminder pass over the gap following the last meal.
///
/// Designed to be driven by an external scheduler (cron, a systemd
/// timer): each invocation looks at the latest event, re-derives the
/// elapsed time, and emits at most one notice. The reminder state on
/// the event keeps reruns from repeating a notice.
pub struct RemindLogic;

impl RemindLogic {
    pub fn run(
        pool: &mut DbPool,
        cfg: &Config,
        now: DateTime<Utc>,
    ) -> AppResult<Option<ReminderKind>> {
        let Some(last) = last_event(&pool.conn)? else {
            return Ok(None);
        };

        let elapsed = compute_elapsed(last.time, now);

        if elapsed.hours >= cfg.second_reminder_hours && !last.reminder.second_sent() {
            notify(true, "Time to eat!", "You should have a meal now.");

            update_reminder_state(&pool.conn, last.id, ReminderState::Second)?;
            ttlog(
                &pool.conn,
                "remind",
                &last.id.to_string(),
                &format!("Urgent reminder after {}h{:02}m", elapsed.hours, elapsed.minutes),
            )?;

            return Ok(Some(ReminderKind::TimeToEat));
        }

        if elapsed.hours >= cfg.first_reminder_hours && !last.reminder.first_sent() {
            notify(false, "Getting hungry?", "It's safe to eat now.");

            update_reminder_state(&pool.conn, last.id, ReminderState::First)?;
            ttlog(
                &pool.conn,
                "remind",
                &last.id.to_string(),
                &format!("Normal reminder after {}h{:02}m", elapsed.hours, elapsed.minutes),
            )?;

            return Ok(Some(ReminderKind::SafeToEat));
        }

        Ok(None)
    }
}
