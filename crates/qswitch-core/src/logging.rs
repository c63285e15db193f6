//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "QSWITCH_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/quick-switch/logs/`, never to stdout:
/// stdout carries printed targets and headless NDJSON responses.
/// Log level is controlled by the `QSWITCH_LOG` environment variable.
///
/// # Examples
/// ```bash
/// QSWITCH_LOG=debug qswitch switch src/foo.ts
/// QSWITCH_LOG=trace qswitch session
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "qswitch.log");

    // Default to info, allow override via QSWITCH_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("quick_switch=info,qswitch_app=info,qswitch_core=info,warn")
    });

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

    tracing::debug!("quick-switch starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("quick-switch").join("logs"))
}
