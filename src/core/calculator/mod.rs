pub mod budget;
pub mod elapsed;
pub mod threshold;

pub use budget::compute_meal_budget;
pub use elapsed::{ElapsedTime, compute_elapsed};
pub use threshold::compute_day_threshold;
