//! Application logging functionality
//!
//! Installs the tracing subscriber and manages the optional log file
//! under ~/.config/bolden/logs/

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Get the path to the bolden config directory
pub fn config_dir() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
    config_dir.join("bolden")
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// File name of today's log file
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    format!("bolden-{}.log", timestamp)
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    fs::create_dir_all(logs_dir())?;
    Ok(())
}

/// Filter used when RUST_LOG is not set
fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global tracing subscriber
///
/// Logs go to stderr, or to today's log file when `to_file` is set. The
/// returned guard flushes the file writer and must be held until exit.
pub fn init_logging(verbose: bool, to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt().with_env_filter(default_filter(verbose));

    if to_file {
        initialize_logs_directory()?;
        let appender = tracing_appender::rolling::never(logs_dir(), current_log_file_name());
        let (writer, guard) = tracing_appender::non_blocking(appender);
        builder
            .with_writer(writer)
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
        tracing::info!(
            "=== bolden started at {} ===",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        Ok(Some(guard))
    } else {
        builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_logs_dir() {
        let name = current_log_file_name();
        assert!(name.starts_with("bolden-") && name.ends_with(".log"));
        assert!(logs_dir().ends_with("bolden/logs"));
    }
}
