//! Top-level injector configuration

use super::{BinderConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Injector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InjectorConfig {
    /// Logging setup
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Binder behaviour
    #[serde(default)]
    pub binder: BinderConfig,
}
