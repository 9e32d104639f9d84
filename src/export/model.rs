use crate::models::meal_event::MealEvent;
use serde::Serialize;

/// Flat export row for meal events. Times go out twice: raw epoch
/// milliseconds (the storage form) and an RFC 3339 string for humans.
#[derive(Serialize, Clone, Debug)]
pub struct MealExport {
    pub id: i64,
    pub time_ms: i64,
    pub time: String,
    pub carb_servings: u32,
    pub reminder: String,
    pub source: String,
    pub created_at: String,
}

impl From<&MealEvent> for MealExport {
    fn from(ev: &MealEvent) -> Self {
        Self {
            id: ev.id,
            time_ms: ev.time_ms(),
            time: ev.time.to_rfc3339(),
            carb_servings: ev.carb_servings,
            reminder: ev.reminder.to_db_str().to_string(),
            source: ev.source.clone(),
            created_at: ev.created_at.clone(),
        }
    }
}
