//! Key/value registry
//!
//! A [`Registry`] maps string keys to opaque [`Value`]s. Handles are cheap to
//! clone and every clone shares the same storage, so a component that holds a
//! handle sees registrations made through any other handle.
//!
//! ## Pattern
//!
//! ```text
//! Registry::new() ──clone──▶ components ──register()/invoke()──▶ shared map
//!        │
//!        └──inject(&mut record)──▶ Binder ──▶ record fields
//! ```
//!
//! Prefer creating a registry explicitly at the composition root and handing
//! clones to the components that need it. [`Registry::global`] exists for code
//! that relies on one ambient, process-wide instance.

use crate::binder::{BindReport, Bindable, Binder};
use crate::error::Result;
use crate::value::{Opaque, Value};
use dashmap::DashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Shared mapping from string keys to opaque values
#[derive(Clone)]
pub struct Registry {
    entries: Arc<DashMap<String, Value>>,
}

impl Registry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Get the process-wide registry
    ///
    /// Created empty on first call and kept for the lifetime of the process.
    /// Every call returns a handle to the same storage.
    pub fn global() -> Self {
        GLOBAL
            .get_or_init(|| {
                debug!("Creating process-wide registry");
                Registry::new()
            })
            .clone()
    }

    /// Whether both handles share the same storage
    pub fn ptr_eq(&self, other: &Registry) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Register `value` under `key`, replacing any previous value
    pub fn register<K: Into<String>, T: Opaque>(&self, key: K, value: T) {
        self.register_value(key, Value::new(value));
    }

    /// Register an already erased value under `key`
    pub fn register_value<K: Into<String>>(&self, key: K, value: Value) {
        let key = key.into();
        trace!(key = %key, type_name = value.type_name(), "Registering value");
        self.entries.insert(key, value);
    }

    /// Remove `key`, returning the value it held
    ///
    /// Removing an absent key is a no-op.
    pub fn unregister(&self, key: &str) -> Option<Value> {
        let removed = self.entries.remove(key).map(|(_, value)| value);
        trace!(key = key, removed = removed.is_some(), "Unregistering value");
        removed
    }

    /// Look up the value stored under `key`
    pub fn invoke(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Look up the value stored under `key` as a `T`
    ///
    /// An absent key yields `Ok(None)`; a value of another type is an error.
    pub fn invoke_as<T: Opaque + Clone>(&self, key: &str) -> Result<Option<T>> {
        self.invoke(key).map(|value| value.extract::<T>()).transpose()
    }

    /// Visit every stored value once, in no particular order
    ///
    /// Values are snapshotted before the first visit; changes made by `visit`
    /// are not seen by the ongoing walk.
    pub fn each<F: FnMut(&Value)>(&self, mut visit: F) {
        let snapshot: Vec<Value> = self
            .entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        for value in &snapshot {
            visit(value);
        }
    }

    /// Whether a value is stored under `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All registered keys, in no particular order
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every stored value
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Bind `target`'s fields against this registry with the default policy
    pub fn inject<B: Bindable + ?Sized>(&self, target: &mut B) -> Result<BindReport> {
        Binder::new(self.clone()).bind(target)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
