//! Application configuration constants.
//!
//! Centralizes the timing and storage values the rest of the crate reads.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ==================== Database Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(db) = config.database {
                if let Some(path) = db.path {
                    tracing::info!("Using database from config.toml: {}", path);
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 2: .env DATABASE_PATH
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from("data/flipdeck.db");
    tracing::info!("Using default database path: {}", default.display());
    default
}

// ==================== Session Configuration ====================

/// Length of one review session in seconds
pub const SESSION_LENGTH_SECS: u32 = 100;

/// Countdown granularity, one engine tick per elapsed second
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
