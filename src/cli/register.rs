//! Register command implementation

use anyhow::Result;
use std::path::Path;

use chrono_tz::Tz;
use feedgym_streaks::streaks::calendar::resolve_tz;
use feedgym_streaks::StreakManager;

/// Create initial streak state for a user
pub fn register_command(db_path: &Path, user_id: &str, timezone: &str) -> Result<()> {
    if timezone != "UTC" && resolve_tz(timezone) == Tz::UTC {
        eprintln!("Warning: unknown timezone '{timezone}', days will be counted in UTC");
    }

    let manager = StreakManager::with_path(db_path)?;
    manager.register_user(user_id, timezone)?;

    println!("Registered {user_id} ({timezone})");
    Ok(())
}
