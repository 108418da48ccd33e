//! Registry operations for types that hold a registry

use crate::binder::{BindReport, Bindable};
use crate::error::Result;
use crate::registry::Registry;
use crate::value::{Opaque, Value};

/// Gives a type the registry operations through a registry handle it holds
///
/// A component that stores a [`Registry`] implements [`registry`](Injector::registry)
/// and gets `register`, `invoke`, `inject_self` and the rest on itself.
///
/// # Example
///
/// ```
/// use injector::{Bindable, Injector, Registry};
///
/// #[derive(Bindable)]
/// struct Worker {
///     registry: Registry,
///     #[injection = "worker.threads"]
///     threads: usize,
/// }
///
/// impl Injector for Worker {
///     fn registry(&self) -> &Registry {
///         &self.registry
///     }
/// }
///
/// let mut worker = Worker { registry: Registry::new(), threads: 1 };
/// worker.register("worker.threads", 8usize);
/// worker.inject_self().unwrap();
/// assert_eq!(worker.threads, 8);
/// ```
pub trait Injector {
    /// Registry this value operates on
    fn registry(&self) -> &Registry;

    /// Register `value` under `key`
    fn register<K: Into<String>, T: Opaque>(&self, key: K, value: T) {
        self.registry().register(key, value);
    }

    /// Register an already erased value under `key`
    fn register_value<K: Into<String>>(&self, key: K, value: Value) {
        self.registry().register_value(key, value);
    }

    /// Remove `key` from the registry
    fn unregister(&self, key: &str) -> Option<Value> {
        self.registry().unregister(key)
    }

    /// Look up the value stored under `key`
    fn invoke(&self, key: &str) -> Option<Value> {
        self.registry().invoke(key)
    }

    /// Visit every stored value
    fn each<F: FnMut(&Value)>(&self, visit: F) {
        self.registry().each(visit);
    }

    /// Bind `target` against the registry
    fn inject<B: Bindable + ?Sized>(&self, target: &mut B) -> Result<BindReport> {
        self.registry().inject(target)
    }

    /// Bind this value's own fields against the registry
    fn inject_self(&mut self) -> Result<BindReport>
    where
        Self: Bindable + Sized,
    {
        let registry = self.registry().clone();
        registry.inject(self)
    }
}

impl Injector for Registry {
    fn registry(&self) -> &Registry {
        self
    }
}
