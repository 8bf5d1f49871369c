//! Read-side queries over streak state
//!
//! Backs the profile page (single status), the social leaderboard, and the
//! reminder cron's at-risk scan.

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::db::StreakDb;
use super::reminders::streak_at_risk;
use super::store::{read_raw_row, state_from_raw, StoreError, STATE_COLUMNS};
use super::transition::StreakState;

/// Query interface for reading streak state
#[derive(Clone)]
pub struct StreakQuery {
    db: StreakDb,
}

impl StreakQuery {
    pub fn new(db: StreakDb) -> Self {
        Self { db }
    }

    /// Get a user's streak state, or None for unknown users
    pub fn get_state(&self, user_id: &str) -> Result<Option<StreakState>> {
        match self.db.load(user_id) {
            Ok(state) => Ok(Some(state)),
            Err(StoreError::UserNotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Longest-streak leaderboard, ties broken by user id
    pub fn top_longest(&self, limit: usize) -> Result<Vec<StreakState>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {STATE_COLUMNS} FROM user_streaks
             ORDER BY longest_streak DESC, user_id ASC LIMIT ?1"
        ))?;
        let raws = stmt
            .query_map([limit as i64], read_raw_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        drop(stmt);
        drop(conn);

        raws.into_iter()
            .map(|raw| state_from_raw(raw).map_err(Into::into))
            .collect()
    }

    /// Users whose streak breaks unless they post before their local
    /// midnight. The day comparison is per-user timezone, so the zone filter
    /// runs in Rust over a SQL prefilter.
    pub fn at_risk(&self, now: DateTime<Utc>) -> Result<Vec<StreakState>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {STATE_COLUMNS} FROM user_streaks
             WHERE current_streak > 0 AND last_post_at IS NOT NULL"
        ))?;
        let raws = stmt
            .query_map([], read_raw_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        drop(stmt);
        drop(conn);

        let mut states = Vec::new();
        for raw in raws {
            let state = state_from_raw(raw)?;
            if streak_at_risk(&state, now) {
                states.push(state);
            }
        }
        Ok(states)
    }
}
