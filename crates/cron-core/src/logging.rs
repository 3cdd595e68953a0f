//! Logging configuration using tracing
//!
//! The terminal belongs to the TUI, so logs only ever go to a file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "CRON_LOG";

/// Filter used when `CRON_LOG` is unset
const DEFAULT_FILTER: &str = "cron=info,cron_app=info,cron_tui=info,cron_core=info,warn";

const LOG_FILE_PREFIX: &str = "cron";

/// Daily files kept before the oldest is removed
const MAX_LOG_FILES: usize = 7;

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/cron/logs/cron.<date>.log`, one
/// file per day, the last week kept.
/// Log level is controlled by the `CRON_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CRON_LOG=debug cargo run
/// CRON_LOG=cron_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&log_dir)
        .map_err(std::io::Error::other)?;

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("CRON {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("cron").join("logs")
}
