use serde::Serialize;

/// Reminder progress attached to a meal event.
///
/// The gap after a meal gets at most two reminders: a "safe to eat"
/// notice and, later, a "time to eat" notice. The state only moves
/// forward (None -> First -> Second) and is advanced exclusively by the
/// reminder pass.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReminderState {
    #[default]
    None,
    First,
    Second,
}

impl ReminderState {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReminderState::None => "none",
            ReminderState::First => "first",
            ReminderState::Second => "second",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(ReminderState::None),
            "first" => Some(ReminderState::First),
            "second" => Some(ReminderState::Second),
            _ => None,
        }
    }

    pub fn first_sent(&self) -> bool {
        !matches!(self, ReminderState::None)
    }

    pub fn second_sent(&self) -> bool {
        matches!(self, ReminderState::Second)
    }
}
