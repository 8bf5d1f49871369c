//! Integration tests for the full streak lifecycle through StreakManager

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use feedgym_streaks::{StreakEvent, StreakManager};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn manager(dir: &TempDir) -> StreakManager {
    StreakManager::with_path(&dir.path().join("streaks.db")).expect("open streaks db")
}

#[test]
fn test_full_streak_lifecycle() {
    let dir = TempDir::new().unwrap();
    let manager = manager(&dir);
    manager.register_user("ana", "UTC").unwrap();
    let recorder = manager.recorder();

    // First post starts the streak
    let events = recorder.record_post("ana", utc(2024, 5, 1, 9, 0)).unwrap();
    assert_eq!(events, vec![StreakEvent::Started { count: 1 }]);

    // Second post the same day is a no-op
    let events = recorder.record_post("ana", utc(2024, 5, 1, 18, 0)).unwrap();
    assert!(events.is_empty(), "same-day repeat must not change the streak");

    // Days 2..=7 extend; day 3 and day 7 cross badge thresholds
    for day in 2..=7 {
        let events = recorder.record_post("ana", utc(2024, 5, day, 9, 0)).unwrap();
        assert_eq!(events[0], StreakEvent::Extended { count: day });
        match day {
            3 => assert!(events.contains(&StreakEvent::BadgeUnlocked { badge: "🔥 3 Días" })),
            7 => {
                assert!(events.contains(&StreakEvent::BadgeUnlocked { badge: "✨ 1 Semana" }));
                assert!(events.contains(&StreakEvent::TitleChanged {
                    title: "Principiante Prometedor".to_string()
                }));
            }
            _ => assert_eq!(events.len(), 1),
        }
    }

    let state = manager.query().get_state("ana").unwrap().unwrap();
    assert_eq!(state.current_streak, 7);
    assert_eq!(state.longest_streak, 7);
    assert_eq!(state.title, "Principiante Prometedor");

    // A three-day gap resets the count but keeps longest, badges, and clears
    // the title
    let events = recorder.record_post("ana", utc(2024, 5, 10, 9, 0)).unwrap();
    assert!(events.contains(&StreakEvent::Reset { count: 1, longest: 7 }));
    assert!(events.contains(&StreakEvent::TitleChanged { title: String::new() }));

    let state = manager.query().get_state("ana").unwrap().unwrap();
    assert_eq!(state.current_streak, 1);
    assert_eq!(state.longest_streak, 7);
    assert_eq!(state.title, "");
    assert_eq!(
        state.badges,
        vec!["🔥 3 Días".to_string(), "✨ 1 Semana".to_string()],
        "badges are permanent across resets"
    );
}

#[test]
fn test_streaks_follow_the_users_timezone() {
    let dir = TempDir::new().unwrap();
    let manager = manager(&dir);
    manager.register_user("tomas", "America/Santiago").unwrap();
    let recorder = manager.recorder();

    // Both instants are 2024-03-10 in UTC, but Santiago (UTC-3) is still on
    // the 9th for the first one
    recorder.record_post("tomas", utc(2024, 3, 10, 2, 0)).unwrap();
    let events = recorder.record_post("tomas", utc(2024, 3, 10, 23, 0)).unwrap();
    assert_eq!(events[0], StreakEvent::Extended { count: 2 });
}

#[test]
fn test_unknown_user_never_errors() {
    let dir = TempDir::new().unwrap();
    let manager = manager(&dir);

    let events = manager
        .recorder()
        .record_post("never-registered", utc(2024, 5, 1, 9, 0))
        .unwrap();
    assert!(events.is_empty());
    assert!(manager.query().get_state("never-registered").unwrap().is_none());
}

#[test]
fn test_leaderboard_and_reminders() {
    let dir = TempDir::new().unwrap();
    let manager = manager(&dir);
    let recorder = manager.recorder();

    for (user, days) in [("ana", 4u32), ("bruno", 2), ("carla", 9)] {
        manager.register_user(user, "UTC").unwrap();
        for day in 1..=days {
            recorder.record_post(user, utc(2024, 5, day, 12, 0)).unwrap();
        }
    }

    let board = manager.query().top_longest(10).unwrap();
    let names: Vec<_> = board.iter().map(|s| s.user_id.as_str()).collect();
    assert_eq!(names, vec!["carla", "ana", "bruno"]);

    // The morning after carla's last post, only her streak is still alive
    // and at risk
    let at_risk = manager.query().at_risk(utc(2024, 5, 10, 10, 0)).unwrap();
    assert_eq!(at_risk.len(), 1);
    assert_eq!(at_risk[0].user_id, "carla");
}

#[test]
fn test_reopening_the_database_keeps_state() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("streaks.db");

    {
        let manager = StreakManager::with_path(&db_path).unwrap();
        manager.register_user("ana", "UTC").unwrap();
        for day in 1..=3 {
            manager.recorder().record_post("ana", utc(2024, 5, day, 9, 0)).unwrap();
        }
    }

    let manager = StreakManager::with_path(&db_path).unwrap();
    let state = manager.query().get_state("ana").unwrap().unwrap();
    assert_eq!(state.current_streak, 3);
    assert_eq!(state.badges, vec!["🔥 3 Días".to_string()]);
}
