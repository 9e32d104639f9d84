use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::meal_event::MealEvent;
use crate::models::reminder_state::ReminderState;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<MealEvent> {
    let time_ms: i64 = row.get("time")?;

    let time = DateTime::<Utc>::from_timestamp_millis(time_ms).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Integer,
            Box::new(AppError::InvalidTimestamp(time_ms.to_string())),
        )
    })?;

    let reminder_str: String = row.get("reminder")?;
    let reminder = ReminderState::from_db_str(&reminder_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidReminderState(reminder_str.clone())),
        )
    })?;

    Ok(MealEvent {
        id: row.get("id")?,
        time,
        carb_servings: row.get("carb_servings")?,
        reminder,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_meal_event(conn: &Connection, ev: &MealEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO meal_events (time, carb_servings, reminder, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ev.time_ms(),
            ev.carb_servings,
            ev.reminder.to_db_str(),
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Events at or after `since`, oldest first.
pub fn load_recent_events(pool: &mut DbPool, since: DateTime<Utc>) -> AppResult<Vec<MealEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM meal_events
         WHERE time >= ?1
         ORDER BY time ASC",
    )?;

    let rows = stmt.query_map([since.timestamp_millis()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Events in the half-open window `[start, end)`, oldest first.
pub fn load_events_between(
    conn: &Connection,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<Vec<MealEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM meal_events
         WHERE time >= ?1 AND time < ?2
         ORDER BY time ASC",
    )?;

    let rows = stmt.query_map(
        params![start.timestamp_millis(), end.timestamp_millis()],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_events(pool: &mut DbPool) -> AppResult<Vec<MealEvent>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM meal_events ORDER BY time ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The most recent event, if any.
pub fn last_event(conn: &Connection) -> AppResult<Option<MealEvent>> {
    let mut stmt = conn.prepare("SELECT * FROM meal_events ORDER BY time DESC LIMIT 1")?;

    let mut rows = stmt.query_map([], map_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Advance the reminder state of one event. The state column is the
/// only mutable part of a meal event.
pub fn update_reminder_state(conn: &Connection, id: i64, state: ReminderState) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE meal_events SET reminder = ?1 WHERE id = ?2",
        params![state.to_db_str(), id],
    )?;

    if changed == 0 {
        return Err(AppError::UnknownEvent(id));
    }
    Ok(())
}

pub fn delete_event(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let n = pool
        .conn
        .execute("DELETE FROM meal_events WHERE id = ?", [id])?;
    Ok(n)
}

/// Delete everything strictly older than `cutoff`; returns the count.
pub fn delete_events_before(conn: &Connection, cutoff: DateTime<Utc>) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM meal_events WHERE time < ?1",
        [cutoff.timestamp_millis()],
    )?;
    Ok(n)
}

/// Delete all events in the half-open window `[start, end)`.
pub fn delete_events_between(
    conn: &Connection,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM meal_events WHERE time >= ?1 AND time < ?2",
        params![start.timestamp_millis(), end.timestamp_millis()],
    )?;
    Ok(n)
}
