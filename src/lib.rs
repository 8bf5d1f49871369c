//! FeedGym Streaks - streak & consistency engine
//!
//! FeedGym rewards users for posting workouts every day. This crate owns the
//! streak logic behind that: timezone-aware day comparisons, the streak
//! transition function, title/badge thresholds, and the SQLite-backed state
//! store. The post-creation handler calls [`StreakRecorder::record_post`]
//! after a post commits; the reminder cron uses [`StreakQuery::at_risk`] to
//! find users about to lose a streak.
//!
//! Streak updates are best-effort bookkeeping: a user whose post succeeded
//! never sees an error from this subsystem.

pub mod streaks;

pub use streaks::{
    StreakEvent, StreakManager, StreakQuery, StreakRecorder, StreakState, TransitionKind,
};
