//! CLI command implementations

pub mod leaderboard;
pub mod record;
pub mod register;
pub mod remind;
pub mod status;
