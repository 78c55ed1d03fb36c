//! Logging initialization and configuration.
//!
//! Logs go to files in the `logs/` directory so they never draw over the TUI.
//! Every run gets its own file.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show debug and higher level logs
//! - `RUST_LOG=info` - Show info and higher level logs (default)
//! - `RUST_LOG=warn` - Show warnings and errors only
//! - `RUST_LOG=error` - Show errors only

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PREFIX: &str = "matrix-term";

/// `logs/` next to the executable, or under the current directory when the
/// executable path is unknown.
fn log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("logs")))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// File name for a run started at `started`,
/// e.g. `matrix-term.2024-12-06-14-30-25.log`.
fn log_file_name(started: DateTime<Local>) -> String {
    format!("{}.{}.log", LOG_PREFIX, started.format("%Y-%m-%d-%H-%M-%S"))
}

/// Initialize the logging system.
///
/// The log level comes from `RUST_LOG`, defaulting to `info`. Failing to set
/// up the log file is reported on stderr and leaves logging off; the app
/// still runs.
pub fn init_logging() {
    let log_dir = log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
        return;
    }
    let log_path = log_dir.join(log_file_name(Local::now()));
    if let Err(e) = init_file_logging(&log_path) {
        eprintln!("Warning: {:#}", e);
        return;
    }
    tracing::info!("Logging initialized - writing to {}", log_path.display());
}

fn init_file_logging(log_path: &Path) -> anyhow::Result<()> {
    use anyhow::Context as _;

    let log_file = fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;

    // Use non-blocking writer to avoid blocking the TUI
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    // The writer flushes from a background thread for as long as the guard
    // lives, which must be the whole program.
    std::mem::forget(guard);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_file_name() {
        let started = Local.with_ymd_and_hms(2024, 12, 6, 14, 30, 25).unwrap();
        assert_eq!(log_file_name(started), "matrix-term.2024-12-06-14-30-25.log");
    }

    #[test]
    fn test_log_dir_is_named_logs() {
        assert_eq!(log_dir().file_name().unwrap(), "logs");
    }
}
