use chrono::{DateTime, Days, Timelike, Utc};

/// Most recent moment at which the tracking day rolled over.
///
/// A user whose day conceptually starts at 4 AM gets meals between
/// midnight and 4 AM counted against the previous day: when the
/// current hour is before `day_threshold_hour` the threshold anchors
/// to yesterday, otherwise to today, always at `hour:00:00.000` UTC.
pub fn compute_day_threshold(day_threshold_hour: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    let hour = day_threshold_hour.min(23);

    let anchor = if now.hour() < hour {
        now.date_naive() - Days::new(1)
    } else {
        now.date_naive()
    };

    // hour <= 23, so the construction cannot fail
    anchor.and_hms_opt(hour, 0, 0).unwrap().and_utc()
}
