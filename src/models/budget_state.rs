use crate::core::constants::{
    MAX_CARB_SERVINGS_PER_MEAL, MAX_IDEAL_CARB_SERVINGS_PER_DAY, MIN_CARB_SERVINGS_PER_MEAL,
    MIN_IDEAL_CARB_SERVINGS_PER_DAY, RECENT_WINDOW_DAYS,
};
use serde::Serialize;

/// Advisory output of the meal budget calculator.
///
/// Recomputed from scratch on every query; nothing here is persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BudgetState {
    pub elapsed_hours: i64,
    pub elapsed_minutes: i64,
    pub total_carb_servings: u32,
    pub ideal_min_per_meal: u32,
    pub ideal_max_per_meal: u32,
    pub ideal_min_per_week: u32,
    pub ideal_max_per_week: u32,
}

impl Default for BudgetState {
    /// Neutral "no data yet" state: a full day since the last meal and
    /// the standard meal and weekly ranges.
    fn default() -> Self {
        Self {
            elapsed_hours: 24,
            elapsed_minutes: 0,
            total_carb_servings: 0,
            ideal_min_per_meal: MIN_CARB_SERVINGS_PER_MEAL,
            ideal_max_per_meal: MAX_CARB_SERVINGS_PER_MEAL,
            ideal_min_per_week: RECENT_WINDOW_DAYS as u32 * MIN_IDEAL_CARB_SERVINGS_PER_DAY,
            ideal_max_per_week: RECENT_WINDOW_DAYS as u32 * MAX_IDEAL_CARB_SERVINGS_PER_DAY,
        }
    }
}
