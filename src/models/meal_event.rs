use super::reminder_state::ReminderState;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MealEvent {
    pub id: i64,
    pub time: DateTime<Utc>,       // ⇔ meal_events.time (INTEGER, epoch ms UTC)
    pub carb_servings: u32,        // ⇔ meal_events.carb_servings (INTEGER >= 0)
    pub reminder: ReminderState,   // ⇔ meal_events.reminder ('none'|'first'|'second')
    pub source: String,            // ⇔ meal_events.source (TEXT, default 'cli')
    pub created_at: String,        // ⇔ meal_events.created_at (TEXT, RFC 3339)
}

impl MealEvent {
    /// High-level constructor for events recorded by the CLI.
    /// - `reminder` starts at None (advanced only by the reminder pass)
    /// - `source = "cli"`
    /// - `created_at = now() in RFC 3339`
    pub fn new(time: DateTime<Utc>, carb_servings: u32) -> Self {
        Self {
            id: 0,
            time,
            carb_servings,
            reminder: ReminderState::None,
            source: "cli".to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Event time as epoch milliseconds, the storage representation.
    pub fn time_ms(&self) -> i64 {
        self.time.timestamp_millis()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M").to_string()
    }
}
