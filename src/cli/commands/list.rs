use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::constants::RECENT_WINDOW_DAYS;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_events, load_events_between, load_recent_events};
use crate::errors::{AppError, AppResult};
use crate::models::meal_event::MealEvent;
use crate::utils::date::{day_bounds_utc, parse_period};
use crate::utils::table::{Column, Table};
use crate::utils::time::now_utc;
use chrono::Days;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, all } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let events = if *all {
            load_all_events(&mut pool)?
        } else if let Some(p) = period {
            let (start_day, end_day) = parse_period(p).map_err(AppError::InvalidDate)?;
            let (start, _) = day_bounds_utc(start_day);
            let (_, end) = day_bounds_utc(end_day);
            load_events_between(&pool.conn, start, end)?
        } else {
            let since = now_utc() - Days::new(RECENT_WINDOW_DAYS as u64);
            load_recent_events(&mut pool, since)?
        };

        if events.is_empty() {
            println!("No meal events found.");
            return Ok(());
        }

        print_events(&events);
    }
    Ok(())
}

fn print_events(events: &[MealEvent]) {
    let mut table = Table::new(vec![
        Column::right("ID", 4),
        Column::left("TIME (UTC)", 16),
        Column::right("SERVINGS", 8),
        Column::left("REMINDER", 8),
        Column::left("SOURCE", 6),
    ]);

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.time_str(),
            ev.carb_servings.to_string(),
            ev.reminder.to_db_str().to_string(),
            ev.source.clone(),
        ]);
    }

    let total: u32 = events.iter().map(|e| e.carb_servings).sum();

    print!("{}", table.render());
    println!(
        "\n{} event(s), {} carb serving(s) total",
        events.len(),
        total
    );
}
