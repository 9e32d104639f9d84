use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{now_utc, parse_timestamp};

/// Record a meal event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        servings,
        time,
        force,
    } = cmd
    {
        //
        // 1. Resolve the event time (explicit RFC 3339 or now)
        //
        let event_time = match time {
            Some(raw) => {
                parse_timestamp(raw).ok_or_else(|| AppError::InvalidTimestamp(raw.clone()))?
            }
            None => now_utc(),
        };

        //
        // 2. Open DB
        //
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 3. Execute logic
        //
        AddLogic::apply(&mut pool, cfg, *servings, event_time, *force)?;
    }

    Ok(())
}
