use crate::config::Config;
use crate::core::remind::RemindLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::time::now_utc;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    if RemindLogic::run(&mut pool, cfg, now_utc())?.is_none() {
        info("No reminder due.");
    }

    Ok(())
}
