//! Logging system initialization
//!
//! This module initializes the tracing subscriber from [`LoggingConfig`].
//! Stdout carries the command protocol, so log output goes to stderr unless a
//! log file is configured.

use crate::config::LoggingConfig;
use crate::errors::{Result, ShortmapError};

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during startup, after the
/// configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Errors
/// * `FileOperation` if the log file cannot be opened
/// * `Configuration` if a global subscriber is already installed
pub fn init_logging(config: &LoggingConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(path) => {
            // Non-rotating, append to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    ShortmapError::file_operation(format!(
                        "Failed to open log file {}: {}",
                        path, e
                    ))
                })?;
            Box::new(file)
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| {
        ShortmapError::configuration(format!("Failed to initialize logging: {}", e))
    })?;

    Ok(guard)
}
