//! Formatting utilities used for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Human phrasing of an elapsed duration, e.g. "1 hour 12 minutes".
/// Hours are omitted when zero; minutes always appear.
pub fn elapsed_prose(hours: i64, minutes: i64) -> String {
    let mut out = String::new();

    if hours > 0 {
        out.push_str(&hours.to_string());
        out.push_str(if hours == 1 { " hour " } else { " hours " });
    }

    out.push_str(&minutes.to_string());
    out.push_str(if minutes == 1 { " minute" } else { " minutes" });

    out
}

/// Compact HH:MM rendition of a minute count, with optional sign.
pub fn mins2readable(mins: i64, want_sign: bool) -> String {
    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
