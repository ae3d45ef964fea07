//! Runtime configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | WORK_DIR | /var/lib/kiosk | Working directory (draft database, logs) |
//! | ENVIRONMENT | development | Runtime environment |
//! | PANEL_POLL_INTERVAL_MS | 15000 | Staff panel poll interval |
//! | LOG_LEVEL | info | Tracing level |

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the local draft database and log files
    pub work_dir: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Staff panel poll interval in milliseconds
    pub panel_poll_interval_ms: u64,
    /// Tracing level for the logger
    pub log_level: String,
}

impl Config {
    /// Load configuration from the environment (and `.env` if present),
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/kiosk".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            panel_poll_interval_ms: std::env::var("PANEL_POLL_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15_000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Path of the redb draft database inside the working directory
    pub fn draft_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("drafts.redb")
    }

    pub fn panel_poll_interval(&self) -> Duration {
        Duration::from_millis(self.panel_poll_interval_ms)
    }
}
