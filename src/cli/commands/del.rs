use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, date: date_str } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // By id: no confirmation needed for a single row
        //
        if let Some(event_id) = id {
            DeleteLogic::by_id(&mut pool, *event_id)?;
            success(format!("Meal event {} has been deleted.", event_id));
            return Ok(());
        }

        //
        // By date: wipes a whole day, confirm first
        //
        let Some(raw) = date_str else {
            return Err(AppError::Other(
                "Nothing to delete: pass --id or a date (YYYY-MM-DD)".to_string(),
            ));
        };

        let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;

        let prompt = format!(
            "Delete ALL meal events for {}? This action is irreversible.",
            d
        );

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::by_date(&mut pool, d)?;
        success(format!("All meal events for {} have been deleted.", d));
    }

    Ok(())
}
