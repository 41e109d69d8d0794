//! File logging for the terminal client.
//!
//! The TUI owns stdout/stderr, so logs go to a per-session file under the
//! platform cache directory.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber writing to
/// `<cache>/sconwar/logs/<session>/client.log`.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and closes the writer.
pub fn setup_logging(session_label: Option<&str>) -> Result<WorkerGuard> {
    let session = match session_label {
        Some(label) => label.to_string(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        }
    };

    let session_log_dir = log_directory().join(&session);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // File layer only; stderr belongs to the TUI.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(%session, "logging initialized");
    tracing::info!("log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for logs, falling back to the temp dir.
pub fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "sconwar")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("sconwar").join("logs"))
}
