//! Status command implementation

use anyhow::Result;
use std::path::Path;

use feedgym_streaks::StreakManager;

/// Show a user's streak status
pub fn status_command(db_path: &Path, user_id: &str, json: bool) -> Result<()> {
    let manager = StreakManager::with_path(db_path)?;

    let Some(state) = manager.query().get_state(user_id)? else {
        println!("No streak state for {user_id}.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("{user_id} ({})", state.timezone);
    println!("  Current streak: {} days", state.current_streak);
    println!("  Longest streak: {} days", state.longest_streak);
    match state.last_post_at {
        Some(at) => println!("  Last post:      {}", at.to_rfc3339()),
        None => println!("  Last post:      never"),
    }
    if !state.title.is_empty() {
        println!("  Title:          {}", state.title);
    }
    if !state.badges.is_empty() {
        println!("  Badges:         {}", state.badges.join(", "));
    }

    Ok(())
}
