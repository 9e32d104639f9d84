pub mod budget_state;
pub mod meal_event;
pub mod reminder_state;
