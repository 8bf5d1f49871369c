//! Consistency reminder decisions
//!
//! The reminder cron nudges users whose streak survives only if they post
//! before their local midnight. Delivery is someone else's problem; this
//! module only decides who gets nudged and with what copy.

use chrono::{DateTime, Utc};

use super::calendar::{next_day, resolve_tz};
use super::transition::StreakState;

/// True if the streak is alive but will break unless the user posts today
/// (their local calendar day).
pub fn streak_at_risk(state: &StreakState, now: DateTime<Utc>) -> bool {
    if state.current_streak == 0 {
        return false;
    }
    let Some(last) = state.last_post_at else {
        return false;
    };
    let tz = resolve_tz(&state.timezone);
    // Last post was local-yesterday: today is the last chance to extend
    next_day(last, now, tz)
}

/// Nudge copy for an at-risk user
pub fn reminder_message(state: &StreakState) -> String {
    match state.current_streak {
        1 => "¡No pierdas el impulso! Publica hoy para seguir tu racha. 🔥".to_string(),
        n => format!("¡Tu racha de {n} días está en riesgo! Publica hoy para mantenerla. 🔥"),
    }
}
