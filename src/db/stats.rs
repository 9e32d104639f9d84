use crate::core::constants::RECENT_WINDOW_DAYS;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::{DateTime, Days, Utc};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL EVENTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM meal_events", [], |row| row.get(0))?;
    println!(
        "{}• Total meal events:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) TIME RANGE
    //
    let first_ms: Option<i64> = pool
        .conn
        .query_row("SELECT MIN(time) FROM meal_events", [], |row| row.get(0))
        .optional()?
        .flatten();
    let last_ms: Option<i64> = pool
        .conn
        .query_row("SELECT MAX(time) FROM meal_events", [], |row| row.get(0))
        .optional()?
        .flatten();

    match (
        first_ms.and_then(DateTime::<Utc>::from_timestamp_millis),
        last_ms.and_then(DateTime::<Utc>::from_timestamp_millis),
    ) {
        (Some(first), Some(last)) => {
            println!(
                "{}• Range:{} {} → {}",
                CYAN,
                RESET,
                first.format("%Y-%m-%d %H:%M"),
                last.format("%Y-%m-%d %H:%M")
            );
        }
        _ => {
            println!("{}• Range:{} {}empty{}", CYAN, RESET, GREY, RESET);
        }
    }

    //
    // 4) SERVINGS IN THE RECENT WINDOW
    //
    let window_start = Utc::now() - Days::new(RECENT_WINDOW_DAYS as u64);
    let servings: i64 = pool.conn.query_row(
        "SELECT IFNULL(SUM(carb_servings), 0) FROM meal_events WHERE time >= ?1",
        [window_start.timestamp_millis()],
        |row| row.get(0),
    )?;
    println!(
        "{}• Carb servings (last {} days):{} {}{}{}",
        CYAN, RECENT_WINDOW_DAYS, RESET, GREEN, servings, RESET
    );

    //
    // 5) REMINDER STATE BREAKDOWN
    //
    let pending: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM meal_events WHERE reminder != 'second'",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Events with reminders still pending:{} {}",
        CYAN, RESET, pending
    );

    println!();
    Ok(())
}
