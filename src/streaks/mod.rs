//! Streak & consistency engine for FeedGym
//!
//! Tracks per-user daily posting streaks in a SQLite database
//! (`~/.feedgym/streaks.db`): one qualifying post per local calendar day
//! extends the streak, a missed day resets it, and thresholds award titles
//! and permanent badges.
//!
//! # Usage
//!
//! ```ignore
//! let streaks = StreakManager::new()?;
//!
//! // After a post is committed
//! let events = streaks.recorder().record_post(&user_id, Utc::now())?;
//!
//! // Profile page
//! let state = streaks.query().get_state(&user_id)?;
//! ```

pub mod calendar;
mod db;
mod queries;
mod recorder;
pub mod reminders;
mod store;
pub mod thresholds;
mod transition;

pub use db::{default_db_path, StreakDb};
pub use queries::StreakQuery;
pub use recorder::StreakRecorder;
pub use store::StoreError;
pub use transition::{transition, StreakState, StreakUpdate, TransitionKind};

use anyhow::Result;

/// Streak change produced by recording a post
#[derive(Debug, Clone, PartialEq)]
pub enum StreakEvent {
    /// First qualifying post ever
    Started { count: u32 },
    /// Streak extended by a consecutive-day post
    Extended { count: u32 },
    /// Streak reset after a gap; the longest streak is retained
    Reset { count: u32, longest: u32 },
    /// A badge threshold was crossed
    BadgeUnlocked { badge: &'static str },
    /// The display title changed (up on thresholds, down on resets)
    TitleChanged { title: String },
}

/// Central manager for streak tracking
///
/// Coordinates recording and querying of streak state.
/// Thread-safe through an internal mutex on the database connection.
#[derive(Clone)]
pub struct StreakManager {
    db: StreakDb,
}

impl StreakManager {
    /// Create a StreakManager with the default database location
    pub fn new() -> Result<Self> {
        let db = StreakDb::open_default()?;
        Ok(Self { db })
    }

    /// Create a StreakManager with a custom database path
    pub fn with_path(path: &std::path::Path) -> Result<Self> {
        let db = StreakDb::open(path)?;
        Ok(Self { db })
    }

    /// Create initial streak state for a user (no-op if already registered)
    pub fn register_user(&self, user_id: &str, timezone: &str) -> Result<()> {
        self.db.register(user_id, timezone)?;
        Ok(())
    }

    /// Get a recorder for applying post events
    pub fn recorder(&self) -> StreakRecorder {
        StreakRecorder::new(self.db.clone())
    }

    /// Get a query interface for reading streak state
    pub fn query(&self) -> StreakQuery {
        StreakQuery::new(self.db.clone())
    }

    /// Delete all streak state
    pub fn reset_all(&self) -> Result<()> {
        self.db.reset_all()
    }
}
