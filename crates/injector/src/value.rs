//! Opaque values stored in the registry
//!
//! Every registered value is erased behind [`Value`], a reference-counted
//! handle that remembers the concrete type name. Getting the concrete type
//! back is always an explicit, checked step.

use crate::error::{Error, Result};
use downcast_rs::{DowncastSync, impl_downcast};
use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

/// Marker for anything that can live in the registry
///
/// Implemented for every `'static + Send + Sync` type.
pub trait Opaque: DowncastSync {}

impl<T: Any + Send + Sync> Opaque for T {}

impl_downcast!(sync Opaque);

/// Type-erased registry value
///
/// Cloning a `Value` is cheap and shares the underlying allocation.
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Opaque>,
    type_name: &'static str,
}

impl Value {
    /// Erase `value`
    ///
    /// Passing a `Value` returns it unchanged instead of nesting it.
    pub fn new<T: Opaque>(value: T) -> Self {
        let boxed: Box<dyn Opaque> = Box::new(value);
        match boxed.downcast::<Value>() {
            Ok(value) => *value,
            Err(boxed) => Self {
                inner: Arc::from(boxed),
                type_name: type_name::<T>(),
            },
        }
    }

    /// Erase an already shared value without copying it
    ///
    /// An `Arc<Value>` yields the value it holds.
    pub fn from_arc<T: Opaque>(value: Arc<T>) -> Self {
        let erased: Arc<dyn Opaque> = value;
        match erased.downcast_arc::<Value>() {
            Ok(value) => Value::clone(&value),
            Err(erased) => Self {
                inner: erased,
                type_name: type_name::<T>(),
            },
        }
    }

    /// Name of the concrete type held by this value
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the held value is a `T`
    pub fn is<T: Opaque>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrow the held value as a `T`
    pub fn downcast_ref<T: Opaque>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Share the held value as an `Arc<T>`
    pub fn downcast_arc<T: Opaque>(&self) -> Result<Arc<T>> {
        self.inner
            .clone()
            .downcast_arc::<T>()
            .map_err(|_| Error::downcast(type_name::<T>(), self.type_name))
    }

    /// Clone the held value out as a `T`
    pub fn extract<T: Opaque + Clone>(&self) -> Result<T> {
        self.downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Error::downcast(type_name::<T>(), self.type_name))
    }

    /// Whether both values share the same allocation
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value<{}>", self.type_name)
    }
}
