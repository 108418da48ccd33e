//! Configuration management
//!
//! Typed configuration plus a Figment-based loader merging defaults, a TOML
//! file and `INJECTOR__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{BinderConfig, InjectorConfig, LoggingConfig};
