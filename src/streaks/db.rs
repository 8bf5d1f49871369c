//! SQLite database connection and schema management for streak state
//!
//! Manages the `~/.feedgym/streaks.db` database with automatic schema
//! migration.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Default database location (~/.feedgym/streaks.db)
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".feedgym")
        .join("streaks.db")
}

/// Database wrapper shared by the recorder and query handles
#[derive(Clone)]
pub struct StreakDb {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl StreakDb {
    /// Open or create the streaks database at the default location
    pub fn open_default() -> Result<Self> {
        Self::open(&default_db_path())
    }

    /// Open or create the streaks database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open streaks db: {}", path.display()))?;

        // WAL mode so the reminder scan can read while post handlers write
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get a reference to the connection
    pub(crate) fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("Streaks DB lock poisoned")
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        drop(conn);
        self.run_migrations()?;
        Ok(())
    }

    /// Run any pending migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn();

        let version: i32 = conn
            .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))
            .unwrap_or(0);

        // Migration 2: per-user timezone column. Databases created before it
        // assumed an implicit America/Santiago zone for everyone.
        if version < 2 {
            let has_timezone: bool = conn
                .prepare("SELECT COUNT(*) FROM pragma_table_info('user_streaks') WHERE name = 'timezone'")
                .and_then(|mut s| s.query_row([], |r| r.get::<_, i32>(0)))
                .map(|c| c > 0)
                .unwrap_or(false);

            if !has_timezone {
                conn.execute_batch(
                    "ALTER TABLE user_streaks ADD COLUMN timezone TEXT NOT NULL DEFAULT 'America/Santiago';",
                )?;
            }

            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (2)", [])?;
        }

        Ok(())
    }

    /// Delete all streak state (reset to empty)
    pub fn reset_all(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute("DELETE FROM user_streaks", [])?;
        Ok(())
    }
}

/// SQL schema for the streaks database
const SCHEMA_SQL: &str = r#"
-- Streak state (one row per user)
CREATE TABLE IF NOT EXISTS user_streaks (
    user_id TEXT PRIMARY KEY,
    current_streak INTEGER NOT NULL DEFAULT 0,
    longest_streak INTEGER NOT NULL DEFAULT 0,
    last_post_at INTEGER,
    timezone TEXT NOT NULL DEFAULT 'UTC',
    title TEXT NOT NULL DEFAULT '',
    badges TEXT NOT NULL DEFAULT '[]',
    updated_at INTEGER
);
CREATE INDEX IF NOT EXISTS idx_streaks_longest ON user_streaks(longest_streak);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (2);
"#;
