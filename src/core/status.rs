use crate::config::Config;
use crate::core::calculator::compute_meal_budget;
use crate::core::constants::{MAX_SERVING_CHOICE, RECENT_WINDOW_DAYS};
use crate::db::pool::DbPool;
use crate::db::queries::load_recent_events;
use crate::errors::AppResult;
use crate::models::budget_state::BudgetState;
use crate::utils::colors::{Palette, palette_for};
use crate::utils::formatting::elapsed_prose;
use chrono::{DateTime, Days, Utc};

const BAR_WIDTH: usize = 40;

/// The status panel: advisory phrase, elapsed time, serving picker and
/// weekly budget bar, the terminal rendition of the tracker screen.
pub struct StatusLogic;

impl StatusLogic {
    pub fn run(pool: &mut DbPool, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
        let window_start = now - Days::new(RECENT_WINDOW_DAYS as u64);
        let events = load_recent_events(pool, window_start)?;
        let budget = compute_meal_budget(&events, now, cfg.day_threshold_hour());

        print!("{}", render_panel(&budget, events.is_empty(), cfg));
        Ok(())
    }
}

pub fn phrase(elapsed_hours: i64, cfg: &Config) -> &'static str {
    if elapsed_hours >= cfg.second_reminder_hours {
        "Time to eat!"
    } else if elapsed_hours >= cfg.first_reminder_hours {
        "It's safe to eat now."
    } else {
        "Please wait before eating."
    }
}

pub fn render_panel(budget: &BudgetState, no_data: bool, cfg: &Config) -> String {
    let pal = palette_for(&cfg.theme);
    let mut out = String::new();

    out.push_str(&format!(
        "{}{}{}\n",
        pal.accent,
        phrase(budget.elapsed_hours, cfg),
        pal.reset
    ));

    if no_data {
        out.push_str(&format!(
            "No meals recorded in the last {} days.\n",
            RECENT_WINDOW_DAYS
        ));
    } else {
        out.push_str(&format!(
            "Last meal: {} ago\n",
            elapsed_prose(budget.elapsed_hours, budget.elapsed_minutes)
        ));
    }

    out.push_str("\nSelect your total carb servings:\n");
    out.push_str(&render_serving_grid(budget, &pal));

    out.push_str(&format!(
        "\nTotal carb servings (last {} days): {}\n",
        RECENT_WINDOW_DAYS, budget.total_carb_servings
    ));

    out.push_str(&format!(
        "\nWeekly budget ({}\u{2013}{} servings):\n",
        budget.ideal_min_per_week, budget.ideal_max_per_week
    ));
    out.push_str(&render_budget_bar(budget, &pal));

    out
}

/// 0..=8 choices in three columns; the ideal range is bracketed and
/// highlighted, everything else stays dim.
fn render_serving_grid(budget: &BudgetState, pal: &Palette) -> String {
    let mut out = String::new();

    for choice in 0..=MAX_SERVING_CHOICE {
        let ideal = (budget.ideal_min_per_meal..=budget.ideal_max_per_meal).contains(&choice);

        if ideal {
            out.push_str(&format!("{}[{:>2}]{}", pal.accent, choice, pal.reset));
        } else {
            out.push_str(&format!("{} {:>2} {}", pal.dim, choice, pal.reset));
        }

        if (choice + 1) % 3 == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    out
}

/// Weekly budget bar. Outer margins are over/under zones, the middle
/// is the ideal band; the marker shows where the running total sits.
fn render_budget_bar(budget: &BudgetState, pal: &Palette) -> String {
    let max_budget = budget.ideal_min_per_week + budget.ideal_max_per_week;
    if max_budget == 0 {
        return String::new();
    }

    let margin = budget.ideal_min_per_week as f64 / max_budget as f64;
    let edge = ((margin / 2.0) * BAR_WIDTH as f64).round() as usize;

    let position = budget.total_carb_servings.min(max_budget) as f64 / max_budget as f64;
    let marker = (position * (BAR_WIDTH - 1) as f64).round() as usize;

    let mut out = String::new();
    for i in 0..BAR_WIDTH {
        let color = if i < edge || i >= BAR_WIDTH - edge {
            pal.bad
        } else if i < 2 * edge || i >= BAR_WIDTH - 2 * edge {
            pal.warn
        } else {
            pal.good
        };

        let ch = if i == marker { '█' } else { '─' };
        out.push_str(&format!("{}{}{}", color, ch, pal.reset));
    }
    out.push_str(&format!(
        "  {} / {}\n",
        budget.total_carb_servings, max_budget
    ));

    out
}
