//! The streak transition function
//!
//! Pure logic: given the stored state and the instant of a qualifying post,
//! decide whether the streak starts, extends, resets, or stays untouched.
//! Persistence is the caller's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::{next_day, resolve_tz, same_day};
use super::thresholds::{badges_for, title_for};

/// Per-user streak state as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakState {
    pub user_id: String,
    /// Instant of the last qualifying post (None before the first ever)
    pub last_post_at: Option<DateTime<Utc>>,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// IANA zone name; unknown names degrade to UTC at comparison time
    pub timezone: String,
    /// Earned badge labels, never removed
    pub badges: Vec<String>,
    /// Display title for the current streak; empty below the first threshold
    pub title: String,
}

impl StreakState {
    /// Fresh state for a newly registered user (no posts yet).
    pub fn new(user_id: &str, timezone: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            last_post_at: None,
            current_streak: 0,
            longest_streak: 0,
            timezone: timezone.to_string(),
            badges: Vec::new(),
            title: String::new(),
        }
    }
}

/// How a transition changed the streak count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// First qualifying post ever
    Started,
    /// Post on the calendar day after the previous one
    Extended,
    /// Gap of two or more days, or a post dated before the previous one
    Reset,
}

/// Result of a transition that requires a write
#[derive(Debug, Clone)]
pub struct StreakUpdate {
    pub state: StreakState,
    pub kind: TransitionKind,
    /// Badges earned by this transition (not previously held)
    pub new_badges: Vec<&'static str>,
    pub title_changed: bool,
}

/// Apply a qualifying post at `now` to `state`.
///
/// Returns `None` when `now` falls on the same local calendar day as the
/// last post: the state is untouched and the caller must skip the write.
/// Posting several times in one day never changes the streak.
pub fn transition(state: &StreakState, now: DateTime<Utc>) -> Option<StreakUpdate> {
    let tz = resolve_tz(&state.timezone);

    let (kind, new_streak) = match state.last_post_at {
        None => (TransitionKind::Started, 1),
        Some(last) if same_day(last, now, tz) => return None,
        Some(last) if next_day(last, now, tz) => {
            (TransitionKind::Extended, state.current_streak + 1)
        }
        // Any other gap resets, including `now` before the last post
        // (clock skew or backdated posts start the streak over).
        Some(_) => (TransitionKind::Reset, 1),
    };

    let new_title = title_for(new_streak);
    let mut badges = state.badges.clone();
    let mut new_badges = Vec::new();
    for label in badges_for(new_streak) {
        if !badges.iter().any(|b| b == label) {
            badges.push(label.to_string());
            new_badges.push(label);
        }
    }

    Some(StreakUpdate {
        kind,
        new_badges,
        title_changed: new_title != state.title,
        state: StreakState {
            user_id: state.user_id.clone(),
            last_post_at: Some(now),
            current_streak: new_streak,
            longest_streak: state.longest_streak.max(new_streak),
            timezone: state.timezone.clone(),
            badges,
            title: new_title.to_string(),
        },
    })
}
