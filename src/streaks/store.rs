//! Row-level streak state operations
//!
//! Loads and stores `StreakState` rows. Writes go through a conditional
//! update keyed on the prior `last_post_at`, so two posts racing on stale
//! state cannot both count the same day.

use chrono::{DateTime, Utc};
use rusqlite::params;

use super::db::StreakDb;
use super::transition::StreakState;

/// Errors from streak state storage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no streak state for user '{0}'")]
    UserNotFound(String),

    #[error("badge column is not a valid JSON array: {0}")]
    BadgeDecode(#[from] serde_json::Error),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

/// Raw column tuple for a `user_streaks` row
pub(crate) type RawStreakRow = (String, u32, u32, Option<i64>, String, String, String);

pub(crate) const STATE_COLUMNS: &str =
    "user_id, current_streak, longest_streak, last_post_at, timezone, title, badges";

pub(crate) fn read_raw_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawStreakRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

pub(crate) fn state_from_raw(raw: RawStreakRow) -> Result<StreakState, StoreError> {
    let badges: Vec<String> = serde_json::from_str(&raw.6)?;
    Ok(StreakState {
        user_id: raw.0,
        current_streak: raw.1,
        longest_streak: raw.2,
        last_post_at: raw.3.and_then(DateTime::from_timestamp_millis),
        timezone: raw.4,
        title: raw.5,
        badges,
    })
}

impl StreakDb {
    /// Create initial streak state for a user. Does nothing if the user
    /// already has a row.
    pub fn register(&self, user_id: &str, timezone: &str) -> Result<(), StoreError> {
        let now = Utc::now().timestamp_millis();
        let conn = self.conn();
        conn.execute(
            "INSERT OR IGNORE INTO user_streaks (user_id, timezone, updated_at) VALUES (?1, ?2, ?3)",
            params![user_id, timezone, now],
        )?;
        Ok(())
    }

    /// Load a user's streak state
    pub fn load(&self, user_id: &str) -> Result<StreakState, StoreError> {
        let conn = self.conn();
        let raw = conn.query_row(
            &format!("SELECT {STATE_COLUMNS} FROM user_streaks WHERE user_id = ?1"),
            [user_id],
            read_raw_row,
        );
        drop(conn);

        match raw {
            Ok(raw) => state_from_raw(raw),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(StoreError::UserNotFound(user_id.to_string()))
            }
            Err(err) => Err(StoreError::Db(err)),
        }
    }

    /// Conditionally store a transitioned state.
    ///
    /// The optimistic concurrency token is the `last_post_at` the transition
    /// was computed from: the update only lands if the row still carries it.
    /// Returns false when another writer got there first.
    pub fn apply_update(
        &self,
        new_state: &StreakState,
        expected_last_post_at: Option<DateTime<Utc>>,
    ) -> Result<bool, StoreError> {
        let badges = serde_json::to_string(&new_state.badges)?;
        let now = Utc::now().timestamp_millis();

        let conn = self.conn();
        let updated = conn.execute(
            r#"UPDATE user_streaks
               SET current_streak = ?1, longest_streak = ?2, last_post_at = ?3,
                   title = ?4, badges = ?5, updated_at = ?6
               WHERE user_id = ?7 AND last_post_at IS ?8"#,
            params![
                new_state.current_streak,
                new_state.longest_streak,
                new_state.last_post_at.map(|t| t.timestamp_millis()),
                new_state.title,
                badges,
                now,
                new_state.user_id,
                expected_last_post_at.map(|t| t.timestamp_millis()),
            ],
        )?;

        Ok(updated == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaks::transition::transition;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_register_and_load() {
        let dir = tempdir().unwrap();
        let db = StreakDb::open(&dir.path().join("s.db")).unwrap();

        db.register("ana", "America/Santiago").unwrap();
        let state = db.load("ana").unwrap();
        assert_eq!(state.user_id, "ana");
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.last_post_at, None);
        assert_eq!(state.timezone, "America/Santiago");
        assert!(state.badges.is_empty());
        assert_eq!(state.title, "");

        // Re-registering keeps the existing row
        db.register("ana", "UTC").unwrap();
        assert_eq!(db.load("ana").unwrap().timezone, "America/Santiago");
    }

    #[test]
    fn test_load_unknown_user() {
        let dir = tempdir().unwrap();
        let db = StreakDb::open(&dir.path().join("s.db")).unwrap();
        assert!(matches!(
            db.load("nobody"),
            Err(StoreError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_apply_update_roundtrip() {
        let dir = tempdir().unwrap();
        let db = StreakDb::open(&dir.path().join("s.db")).unwrap();
        db.register("ana", "UTC").unwrap();

        let state = db.load("ana").unwrap();
        let update = transition(&state, utc(2024, 5, 1, 12, 0)).unwrap();
        assert!(db.apply_update(&update.state, state.last_post_at).unwrap());

        let stored = db.load("ana").unwrap();
        assert_eq!(stored, update.state);
    }

    #[test]
    fn test_apply_update_rejects_stale_token() {
        let dir = tempdir().unwrap();
        let db = StreakDb::open(&dir.path().join("s.db")).unwrap();
        db.register("ana", "UTC").unwrap();

        let state = db.load("ana").unwrap();
        let update = transition(&state, utc(2024, 5, 1, 12, 0)).unwrap();
        assert!(db.apply_update(&update.state, state.last_post_at).unwrap());

        // A second writer that computed from the pre-update state loses
        let stale = transition(&state, utc(2024, 5, 1, 12, 0)).unwrap();
        assert!(!db.apply_update(&stale.state, state.last_post_at).unwrap());

        // Stored state is from the first writer only
        assert_eq!(db.load("ana").unwrap().current_streak, 1);
    }
}
