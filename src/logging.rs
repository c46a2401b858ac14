//! Tracing subscriber setup.
//!
//! A console layer always, plus a file layer writing to
//! `<base_dir>/logs/oll_crm.log` when the file handler is enabled.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LoggingSettings, Settings};
use crate::errors::{AppError, AppResult};

/// Keeps the file writer flushing until dropped.
#[must_use = "dropping the guard stops the file handler"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Build the filter: verbose forces debug, otherwise `RUST_LOG` wins over
/// the configured level.
pub fn build_filter(settings: &LoggingSettings, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Create the logs directory if the file handler needs it.
pub fn ensure_logs_dir(settings: &LoggingSettings) -> AppResult<()> {
    if settings.file {
        fs::create_dir_all(settings.logs_dir())?;
    }
    Ok(())
}

/// Install the global subscriber.
///
/// Returns an error instead of panicking when a subscriber is already set.
pub fn init(settings: &LoggingSettings, verbose: bool) -> AppResult<LoggingGuard> {
    ensure_logs_dir(settings)?;

    let console = settings
        .console
        .then(|| tracing_subscriber::fmt::layer().boxed());

    let (file, guard) = if settings.file {
        let appender = tracing_appender::rolling::never(settings.logs_dir(), &settings.file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(build_filter(settings, verbose))
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {}", e)))?;

    Ok(LoggingGuard { _file: guard })
}

/// Log the fallbacks taken while settings loaded.
pub fn log_startup_warnings(settings: &Settings) {
    for warning in settings.startup_warnings() {
        tracing::warn!("{}", warning);
    }
}
