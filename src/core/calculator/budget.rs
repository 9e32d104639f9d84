use crate::core::calculator::{compute_day_threshold, compute_elapsed};
use crate::core::constants::{
    MAX_CARB_SERVINGS_PER_MEAL, MAX_CARB_SERVINGS_PER_SNACK, MAX_IDEAL_CARB_SERVINGS_PER_DAY,
    MIN_CARB_SERVINGS_PER_MEAL, MIN_CARB_SERVINGS_PER_SNACK, MIN_IDEAL_CARB_SERVINGS_PER_DAY,
    SNACK_THRESHOLD_MEALS,
};
use crate::models::budget_state::BudgetState;
use crate::models::meal_event::MealEvent;
use chrono::{DateTime, Utc};

/// Derive the advisory budget from a window of meal events.
///
/// `events` must be ordered by time ascending and should cover the
/// trailing week. The function is pure: identical inputs give an
/// identical BudgetState, and the caller supplies `now` explicitly.
///
/// An empty window is not an error, it yields the neutral defaults.
pub fn compute_meal_budget(
    events: &[MealEvent],
    now: DateTime<Utc>,
    day_threshold_hour: u32,
) -> BudgetState {
    let (Some(first), Some(last)) = (events.first(), events.last()) else {
        return BudgetState::default();
    };

    let elapsed = compute_elapsed(last.time, now);

    // Meals recorded since the day rolled over decide whether the next
    // meal should be snack-sized.
    let day_threshold = compute_day_threshold(day_threshold_hour, now);
    let meals_today = events.iter().filter(|e| e.time >= day_threshold).count();

    let (meal_min, meal_max) = if meals_today >= SNACK_THRESHOLD_MEALS {
        (MIN_CARB_SERVINGS_PER_SNACK, MAX_CARB_SERVINGS_PER_SNACK)
    } else {
        (MIN_CARB_SERVINGS_PER_MEAL, MAX_CARB_SERVINGS_PER_MEAL)
    };

    // The weekly range scales with the days the window actually spans,
    // so a fresh database is not judged against a full week.
    let day_span = (last.time.date_naive() - first.time.date_naive())
        .num_days()
        .max(0) as u32
        + 1;

    BudgetState {
        elapsed_hours: elapsed.hours,
        elapsed_minutes: elapsed.minutes,
        total_carb_servings: events.iter().map(|e| e.carb_servings).sum(),
        ideal_min_per_meal: meal_min,
        ideal_max_per_meal: meal_max,
        ideal_min_per_week: day_span * MIN_IDEAL_CARB_SERVINGS_PER_DAY,
        ideal_max_per_week: day_span * MAX_IDEAL_CARB_SERVINGS_PER_DAY,
    }
}
