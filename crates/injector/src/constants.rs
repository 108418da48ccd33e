//! Injector constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "injector.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "injector";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "INJECTOR";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "INJECTOR_LOG";

/// Default log file stem for the rolling appender
pub const LOG_FILE_STEM: &str = "injector";
