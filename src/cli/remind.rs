//! Remind command implementation

use anyhow::Result;
use chrono::Utc;
use std::path::Path;

use feedgym_streaks::streaks::reminders::reminder_message;
use feedgym_streaks::StreakManager;

/// List users whose streak is at risk today
pub fn remind_command(db_path: &Path) -> Result<()> {
    let manager = StreakManager::with_path(db_path)?;
    let at_risk = manager.query().at_risk(Utc::now())?;

    if at_risk.is_empty() {
        println!("No streaks at risk right now.");
        return Ok(());
    }

    println!("{} streak(s) at risk:\n", at_risk.len());
    for state in &at_risk {
        println!("  {} ({} days): {}", state.user_id, state.current_streak, reminder_message(state));
    }

    Ok(())
}
