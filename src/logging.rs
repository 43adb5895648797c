// SPDX-License-Identifier: MPL-2.0
//! Logging system initialization.
//!
//! Installs a `tracing` subscriber writing to stderr, or to
//! `<data dir>/half_frame.log` when file logging is enabled. `RUST_LOG`
//! overrides the `[logging] level` setting.

use crate::app::config::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "half_frame.log";

/// Number of previous session logs kept next to the current one.
const MAX_OLD_LOGS: u8 = 3;

/// Initializes logging.
///
/// The returned guard flushes the file writer on drop and must be held until
/// the program exits. It is `None` when logging to stderr.
///
/// # Errors
///
/// Returns [`Error::Logging`] for an invalid filter directive or when a
/// subscriber is already installed, and [`Error::Io`] when the log directory
/// cannot be prepared.
pub fn init(config: &Config, data_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(std::env::var("RUST_LOG").ok(), config.log_level())?;

    let guard = match data_dir.filter(|_| config.log_to_file()) {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            rotate_on_startup(&dir.join(LOG_FILE))?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let subscriber = fmt()
                .with_writer(writer)
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::Logging(e.to_string()))?;
            Some(guard)
        }
        None => {
            let subscriber = fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .with_target(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::Logging(e.to_string()))?;
            None
        }
    };

    tracing::info!("HalfFrame v{} started", env!("CARGO_PKG_VERSION"));
    Ok(guard)
}

/// `RUST_LOG` wins over the configured level when it is set and non-empty.
fn build_filter(env_value: Option<String>, configured: &str) -> Result<EnvFilter> {
    let directive = env_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| configured.to_string());
    EnvFilter::try_new(&directive)
        .map_err(|e| Error::Logging(format!("invalid log filter '{directive}': {e}")))
}

/// Shifts `half_frame.log` to `half_frame.log.1` and so on, dropping the oldest.
fn rotate_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let numbered = |n: u8| -> PathBuf {
        let mut name = log_path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    };

    let oldest = numbered(MAX_OLD_LOGS);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for n in (1..MAX_OLD_LOGS).rev() {
        let current = numbered(n);
        if current.exists() {
            fs::rename(&current, numbered(n + 1))?;
        }
    }
    fs::rename(log_path, numbered(1))?;
    Ok(())
}
