//! Leaderboard command implementation

use anyhow::Result;
use std::path::Path;

use feedgym_streaks::StreakManager;

/// Show the longest-streak leaderboard
pub fn leaderboard_command(db_path: &Path, limit: usize) -> Result<()> {
    let manager = StreakManager::with_path(db_path)?;
    let board = manager.query().top_longest(limit)?;

    if board.is_empty() {
        println!("No streaks recorded yet.");
        return Ok(());
    }

    for (rank, state) in board.iter().enumerate() {
        println!(
            "  {:>2}. {} - longest {} days (current {})",
            rank + 1,
            state.user_id,
            state.longest_streak,
            state.current_streak,
        );
    }

    Ok(())
}
