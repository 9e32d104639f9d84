use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::now_utc;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    StatusLogic::run(&mut pool, cfg, now_utc())
}
