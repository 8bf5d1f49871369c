use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "feedgym-streaks")]
#[command(about = "Streak and consistency engine for FeedGym")]
#[command(version)]
struct Cli {
    /// Path to the streaks database (defaults to ~/.feedgym/streaks.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create streak state for a new user
    Register {
        /// Opaque user identifier
        user_id: String,

        /// IANA timezone the user's calendar days are counted in
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },

    /// Record a qualifying post event for a user
    Record {
        user_id: String,

        /// Post instant as RFC 3339 (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Show a user's streak status
    Status {
        user_id: String,

        /// Print the raw state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the longest-streak leaderboard
    Leaderboard {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// List users whose streak is at risk today
    Remind,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let db_path = cli
        .db
        .unwrap_or_else(feedgym_streaks::streaks::default_db_path);

    match cli.command {
        Commands::Register { user_id, timezone } => {
            cli::register::register_command(&db_path, &user_id, &timezone)?;
        }
        Commands::Record { user_id, at } => {
            cli::record::record_command(&db_path, &user_id, at.as_deref())?;
        }
        Commands::Status { user_id, json } => {
            cli::status::status_command(&db_path, &user_id, json)?;
        }
        Commands::Leaderboard { limit } => {
            cli::leaderboard::leaderboard_command(&db_path, limit)?;
        }
        Commands::Remind => {
            cli::remind::remind_command(&db_path)?;
        }
    }

    Ok(())
}
