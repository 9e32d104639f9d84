use chrono::{DateTime, Days, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// UTC bounds of a calendar day as a half-open interval `[start, end)`.
pub fn day_bounds_utc(d: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = d.and_hms_opt(0, 0, 0).unwrap().and_utc();
    let end = start + Days::new(1);
    (start, end)
}

/// Parse a period expression into inclusive date bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - ranges of the above, start:end in the same format
pub fn parse_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err("start and end must have the same format".to_string());
        }

        let (s, _) = parse_single(start)?;
        let (_, e) = parse_single(end)?;
        Ok((s, e))
    } else {
        parse_single(p.trim())
    }
}

/// One period token → (first day, last day).
fn parse_single(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| format!("invalid year: {p}"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| format!("invalid year: {p}"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| format!("invalid year: {p}"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p[0..4].parse().map_err(|_| format!("invalid month: {p}"))?;
            let m: u32 = p[5..7].parse().map_err(|_| format!("invalid month: {p}"))?;
            let last = month_last_day(y, m).ok_or_else(|| format!("invalid month: {p}"))?;
            let d1 =
                NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| format!("invalid month: {p}"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| format!("invalid month: {p}"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| format!("invalid date: {p}"))?;
            Ok((d, d))
        }
        _ => Err(format!("unsupported period format: {p}")),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
