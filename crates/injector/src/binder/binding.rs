//! Field binding descriptors

use super::slot::{FieldSlot, OptionalSlot, ReadOnlySlot, Slot};
use crate::error::Result;
use crate::value::{Opaque, Value};
use std::borrow::Cow;
use std::fmt;

/// One bindable field of a record
///
/// Carries the field name, the optional `injection` and `infection` keys and
/// a [`Slot`] giving typed access to the field. Descriptors borrow the record
/// and are rebuilt on every bind.
///
/// # Example
///
/// ```
/// use injector::{Bindable, FieldBinding};
///
/// struct Service {
///     name: String,
///     port: Option<u16>,
/// }
///
/// impl Bindable for Service {
///     fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
///         vec![
///             FieldBinding::new("name", &mut self.name).infection("service.name"),
///             FieldBinding::optional("port", &mut self.port).injection("service.port"),
///         ]
///     }
/// }
/// ```
pub struct FieldBinding<'a> {
    name: &'static str,
    injection: Option<Cow<'static, str>>,
    infection: Option<Cow<'static, str>>,
    slot: Box<dyn Slot + 'a>,
}

impl<'a> FieldBinding<'a> {
    /// Describe a plain, writable field
    pub fn new<T: Opaque + Clone>(name: &'static str, field: &'a mut T) -> Self {
        Self::with_slot(name, FieldSlot(field))
    }

    /// Describe an `Option<T>` field
    pub fn optional<T: Opaque + Clone>(name: &'static str, field: &'a mut Option<T>) -> Self {
        Self::with_slot(name, OptionalSlot(field))
    }

    /// Describe a field that can be read but not written
    pub fn read_only<T: Opaque + Clone>(name: &'static str, field: &'a T) -> Self {
        Self::with_slot(name, ReadOnlySlot(field))
    }

    /// Describe a field through a custom slot
    pub fn with_slot<S: Slot + 'a>(name: &'static str, slot: S) -> Self {
        Self {
            name,
            injection: None,
            infection: None,
            slot: Box::new(slot),
        }
    }

    /// Set the registry key this field is injected from
    pub fn injection<K: Into<Cow<'static, str>>>(mut self, key: K) -> Self {
        self.injection = Some(key.into());
        self
    }

    /// Set the registry key this field is infected into
    pub fn infection<K: Into<Cow<'static, str>>>(mut self, key: K) -> Self {
        self.infection = Some(key.into());
        self
    }

    /// Field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Injection key, if set and non-empty
    pub fn injection_key(&self) -> Option<&str> {
        non_empty(&self.injection)
    }

    /// Infection key, if set and non-empty
    pub fn infection_key(&self) -> Option<&str> {
        non_empty(&self.infection)
    }

    /// Field type name
    pub fn type_name(&self) -> &'static str {
        self.slot.type_name()
    }

    /// Whether the field can be overwritten
    pub fn is_writable(&self) -> bool {
        self.slot.is_writable()
    }

    pub(crate) fn assign(&mut self, value: &Value) -> Result<()> {
        self.slot.assign(value)
    }

    pub(crate) fn expose(&self) -> Option<Value> {
        self.slot.expose()
    }
}

fn non_empty<'a>(key: &'a Option<Cow<'static, str>>) -> Option<&'a str> {
    key.as_deref().filter(|key| !key.is_empty())
}

impl fmt::Debug for FieldBinding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("type_name", &self.type_name())
            .field("injection", &self.injection)
            .field("infection", &self.infection)
            .field("writable", &self.is_writable())
            .finish()
    }
}
