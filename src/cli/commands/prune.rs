use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::prune::PruneLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::now_utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Prune { days } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        PruneLogic::run(&mut pool, *days, now_utc())?;
    }

    Ok(())
}
