//! ANSI color helper utilities for terminal output.

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Palette driven by the configured theme. "dark" is the default;
/// "light" swaps the accents for colors that survive a white
/// background; "plain" disables escape codes entirely (pipes, CI).
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: &'static str,
    pub dim: &'static str,
    pub good: &'static str,
    pub warn: &'static str,
    pub bad: &'static str,
    pub reset: &'static str,
}

pub fn palette_for(theme: &str) -> Palette {
    match theme {
        "light" => Palette {
            accent: BLUE,
            dim: GREY,
            good: GREEN,
            warn: MAGENTA,
            bad: RED,
            reset: RESET,
        },
        "plain" => Palette {
            accent: "",
            dim: "",
            good: "",
            warn: "",
            bad: "",
            reset: "",
        },
        _ => Palette {
            accent: GREEN,
            dim: GREY,
            good: GREEN,
            warn: YELLOW,
            bad: RED,
            reset: RESET,
        },
    }
}
