//! Record command implementation

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

use feedgym_streaks::{StreakEvent, StreakManager};

/// Record a qualifying post event for a user
pub fn record_command(db_path: &Path, user_id: &str, at: Option<&str>) -> Result<()> {
    let now = match at {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid RFC 3339 instant: {raw}"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let manager = StreakManager::with_path(db_path)?;
    let events = manager.recorder().record_post(user_id, now)?;

    if events.is_empty() {
        println!("No streak change for {user_id}.");
        return Ok(());
    }

    for event in &events {
        match event {
            StreakEvent::Started { count } => println!("Streak started: {count} day"),
            StreakEvent::Extended { count } => println!("Streak extended: {count} days"),
            StreakEvent::Reset { count, longest } => {
                println!("Streak reset to {count} (longest stays at {longest})")
            }
            StreakEvent::BadgeUnlocked { badge } => println!("Badge unlocked: {badge}"),
            StreakEvent::TitleChanged { title } if title.is_empty() => {
                println!("Title cleared")
            }
            StreakEvent::TitleChanged { title } => println!("New title: {title}"),
        }
    }

    Ok(())
}
