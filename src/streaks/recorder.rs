//! Streak recorder - applies post events to stored streak state
//!
//! This is the write entry point the post-creation handler calls after a post
//! has been committed. Streak bookkeeping is best-effort: the post already
//! succeeded, so storage failures here are logged and swallowed rather than
//! surfaced to the user.

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::db::StreakDb;
use super::store::StoreError;
use super::transition::{transition, StreakUpdate, TransitionKind};
use super::StreakEvent;

/// Attempts before giving up on a contended conditional update
const MAX_CAS_ATTEMPTS: u32 = 3;

/// Records qualifying post events against streak state
#[derive(Clone)]
pub struct StreakRecorder {
    db: StreakDb,
}

impl StreakRecorder {
    pub fn new(db: StreakDb) -> Self {
        Self { db }
    }

    /// Record a qualifying post by `user_id` at instant `now`.
    ///
    /// Returns the streak events the post produced. A repeat post on the same
    /// local calendar day is a no-op and issues no write. Unknown users and
    /// storage failures return an empty event list without error.
    pub fn record_post(&self, user_id: &str, now: DateTime<Utc>) -> Result<Vec<StreakEvent>> {
        for _attempt in 0..MAX_CAS_ATTEMPTS {
            let state = match self.db.load(user_id) {
                Ok(state) => state,
                Err(StoreError::UserNotFound(_)) => {
                    debug!(user_id, "no streak state for user, skipping");
                    return Ok(Vec::new());
                }
                Err(err) => {
                    warn!(user_id, %err, "failed to load streak state");
                    return Ok(Vec::new());
                }
            };

            // Same-day repeat: state untouched, no write
            let Some(update) = transition(&state, now) else {
                return Ok(Vec::new());
            };

            match self.db.apply_update(&update.state, state.last_post_at) {
                Ok(true) => return Ok(events_for(&update)),
                Ok(false) => {
                    // Lost the conditional update; re-read and recompute
                    debug!(user_id, "streak update lost a write race, retrying");
                    continue;
                }
                Err(err) => {
                    warn!(user_id, %err, "failed to store streak state");
                    return Ok(Vec::new());
                }
            }
        }

        // A concurrent post already advanced the streak for this day
        debug!(user_id, "streak update still contended, skipping");
        Ok(Vec::new())
    }
}

/// Translate a stored transition into events for the caller (toasts,
/// notifications, activity log).
fn events_for(update: &StreakUpdate) -> Vec<StreakEvent> {
    let mut events = Vec::new();
    let count = update.state.current_streak;

    events.push(match update.kind {
        TransitionKind::Started => StreakEvent::Started { count },
        TransitionKind::Extended => StreakEvent::Extended { count },
        TransitionKind::Reset => StreakEvent::Reset {
            count,
            longest: update.state.longest_streak,
        },
    });

    for &badge in &update.new_badges {
        events.push(StreakEvent::BadgeUnlocked { badge });
    }

    if update.title_changed {
        events.push(StreakEvent::TitleChanged {
            title: update.state.title.clone(),
        });
    }

    events
}
