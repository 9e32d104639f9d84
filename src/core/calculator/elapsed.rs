use chrono::{DateTime, TimeDelta, Utc};

/// Time since the last meal, split into whole hours and leftover minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    pub hours: i64,
    pub minutes: i64,
}

impl ElapsedTime {
    /// Sentinel for "a full day or more has passed"; callers treat it
    /// as "plenty of time / no recent data".
    pub const FULL_DAY: ElapsedTime = ElapsedTime {
        hours: 24,
        minutes: 0,
    };
}

/// Split the duration between `last` and `now` into (hours, minutes).
///
/// Anything of 24 hours or more collapses to the FULL_DAY sentinel.
/// Below that the split is floor-truncated, never rounded, so
/// `hours * 60 + minutes` equals the elapsed whole minutes.
pub fn compute_elapsed(last: DateTime<Utc>, now: DateTime<Utc>) -> ElapsedTime {
    let elapsed = now - last;
    if elapsed >= TimeDelta::hours(24) {
        return ElapsedTime::FULL_DAY;
    }

    let total_minutes = elapsed.num_minutes();
    ElapsedTime {
        hours: total_minutes.div_euclid(60),
        minutes: total_minutes.rem_euclid(60),
    }
}
