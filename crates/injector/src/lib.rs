//! # Injector
//!
//! A key/value registry for wiring loosely-coupled components together,
//! plus a binder that copies registry values into struct fields (injection)
//! and struct field values into the registry (infection).
//!
//! ## Example
//!
//! ```
//! use injector::{Bindable, Registry};
//!
//! #[derive(Bindable)]
//! struct Client {
//!     #[injection = "endpoint"]
//!     endpoint: String,
//!     #[infection = "client.retries"]
//!     retries: u32,
//! }
//!
//! let registry = Registry::new();
//! registry.register("endpoint", String::from("http://localhost:8080"));
//!
//! let mut client = Client { endpoint: String::new(), retries: 3 };
//! let report = registry.inject(&mut client).unwrap();
//!
//! assert_eq!(client.endpoint, "http://localhost:8080");
//! assert_eq!(registry.invoke_as::<u32>("client.retries").unwrap(), Some(3));
//! assert!(report.was_injected("endpoint"));
//! ```
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Shared key/value store and the process-wide default |
//! | [`value`] | Type-erased values with checked extraction |
//! | [`binder`] | Field descriptors, injection/infection walk, bind reports |
//! | [`capability`] | Registry operations for types holding a registry |
//! | [`config`] | Figment-based configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Tag names and configuration defaults |

pub mod binder;
pub mod capability;
pub mod config;
pub mod constants;
pub mod error;
pub mod error_ext;
pub mod logging;
pub mod registry;
pub mod value;

pub use binder::{
    BindReport, Bindable, Binder, BoundField, ConflictPolicy, FieldBinding, SkipReason,
    SkippedField, Slot,
};
pub use capability::Injector;
pub use error::{Error, Result};
pub use error_ext::ErrorContext;
pub use registry::Registry;
pub use value::{Opaque, Value};

pub use injector_derive::Bindable;
