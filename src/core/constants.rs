//! Serving-policy and timing constants shared across the application.

/// Ideal carb servings for a regular meal, inclusive bounds.
pub const MIN_CARB_SERVINGS_PER_MEAL: u32 = 2;
pub const MAX_CARB_SERVINGS_PER_MEAL: u32 = 4;

/// Ideal carb servings for a snack, inclusive bounds.
pub const MIN_CARB_SERVINGS_PER_SNACK: u32 = 1;
pub const MAX_CARB_SERVINGS_PER_SNACK: u32 = 2;

/// A tracking day budgets three meals and one snack.
pub const MEALS_PER_DAY: u32 = 3;
pub const SNACKS_PER_DAY: u32 = 1;

/// Once this many meals land in the current tracking day, anything
/// further should be snack-sized.
pub const SNACK_THRESHOLD_MEALS: usize = 3;

pub const MIN_IDEAL_CARB_SERVINGS_PER_DAY: u32 =
    MEALS_PER_DAY * MIN_CARB_SERVINGS_PER_MEAL + SNACKS_PER_DAY * MIN_CARB_SERVINGS_PER_SNACK;
pub const MAX_IDEAL_CARB_SERVINGS_PER_DAY: u32 =
    MEALS_PER_DAY * MAX_CARB_SERVINGS_PER_MEAL + SNACKS_PER_DAY * MAX_CARB_SERVINGS_PER_SNACK;

/// Hour-of-day at which a tracking day rolls over (default 4 AM).
pub const DEFAULT_DAY_THRESHOLD_HOUR: u32 = 4;

/// Window of events considered by status/list, in days.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Events older than this are pruned after every insert.
pub const DEFAULT_RETENTION_DAYS: i64 = 10;

/// Hours since the last meal before the "safe to eat" reminder.
pub const DEFAULT_FIRST_REMINDER_HOURS: i64 = 3;

/// Hours since the last meal before the "time to eat" reminder.
pub const DEFAULT_SECOND_REMINDER_HOURS: i64 = 4;

/// The serving picker offers 0 through this many servings.
pub const MAX_SERVING_CHOICE: u32 = 8;
