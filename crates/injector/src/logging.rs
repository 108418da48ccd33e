//! Structured logging with tracing
//!
//! The library itself only emits `tracing` events. Binaries and tests that
//! want to see them install a subscriber with [`init_logging`].

use crate::constants::{LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error::{Error, Result};
use crate::error_ext::ErrorContext;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// `INJECTOR_LOG` overrides the configured level with a full filter
/// directive. Fails if a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| OsStr::new(LOG_FILE_STEM)),
        )
    });

    // Layer types differ per format, hence the separate branches
    let installed = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stdout).with(file).try_init()
            }
            None => registry.with(stdout).try_init(),
        }
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stdout).with(file).try_init()
            }
            None => registry.with(stdout).try_init(),
        }
    };
    installed.config_context("Failed to install tracing subscriber")?;

    info!(%level, "Logging initialized");
    Ok(())
}

/// Parse a configured level name
///
/// Case-insensitive; `warning` is accepted for `warn`.
pub fn parse_log_level(level: &str) -> Result<Level> {
    let name = level.trim().to_ascii_lowercase();
    let name = if name == "warning" { "warn" } else { name.as_str() };
    if name.is_empty() || name.bytes().any(|byte| byte.is_ascii_digit()) {
        return Err(invalid_level(level));
    }
    name.parse::<Level>().map_err(|_| invalid_level(level))
}

fn invalid_level(level: &str) -> Error {
    Error::configuration(format!(
        "Invalid log level `{level}`: expected trace, debug, info, warn or error"
    ))
}

/// Record which configuration file a load used
///
/// A missing explicit file is not an error; defaults apply.
pub fn log_config_loaded(config_path: &Path, found: bool) {
    let path = config_path.display();
    if found {
        info!(path = %path, "Loaded injector configuration file");
    } else {
        warn!(path = %path, "Injector configuration file not found, using defaults");
    }
}
