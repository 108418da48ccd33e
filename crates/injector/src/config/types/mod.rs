//! Configuration types module

pub mod app;
pub mod binder;
pub mod logging;

pub use app::InjectorConfig;
pub use binder::BinderConfig;
pub use logging::LoggingConfig;
