//! Field accessors used by the binder
//!
//! A [`Slot`] is the typed window a [`FieldBinding`](super::FieldBinding) holds
//! onto one field: it can overwrite the field with a registry value and hand
//! out the field's current value as a [`Value`].

use crate::error::Result;
use crate::value::{Opaque, Value};
use std::any::{Any, type_name};

/// Typed access to a single bindable field
pub trait Slot {
    /// Name of the field's type, for diagnostics
    fn type_name(&self) -> &'static str;

    /// Whether [`assign`](Slot::assign) can change the field
    fn is_writable(&self) -> bool {
        true
    }

    /// Overwrite the field with `value`
    ///
    /// Fails with [`Error::Downcast`](crate::error::Error::Downcast) when `value` holds another type.
    fn assign(&mut self, value: &Value) -> Result<()>;

    /// Current field value, or `None` when there is nothing to expose
    fn expose(&self) -> Option<Value>;
}

/// Slot over a plain field
pub struct FieldSlot<'a, T>(pub &'a mut T);

/// Slot over an `Option<T>` field; injection stores `Some`
pub struct OptionalSlot<'a, T>(pub &'a mut Option<T>);

/// Slot over a field that may only be read
pub struct ReadOnlySlot<'a, T>(pub &'a T);

impl<T: Opaque + Clone> Slot for FieldSlot<'_, T> {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        *self.0 = coerce::<T>(value)?;
        Ok(())
    }

    fn expose(&self) -> Option<Value> {
        Some(Value::new(self.0.clone()))
    }
}

impl<T: Opaque + Clone> Slot for OptionalSlot<'_, T> {
    fn type_name(&self) -> &'static str {
        type_name::<Option<T>>()
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        *self.0 = Some(coerce::<T>(value)?);
        Ok(())
    }

    fn expose(&self) -> Option<Value> {
        self.0.as_ref().map(|inner| Value::new(inner.clone()))
    }
}

impl<T: Opaque + Clone> Slot for ReadOnlySlot<'_, T> {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn is_writable(&self) -> bool {
        false
    }

    // The binder checks `is_writable` first; assignment is ignored.
    fn assign(&mut self, _value: &Value) -> Result<()> {
        Ok(())
    }

    fn expose(&self) -> Option<Value> {
        Some(Value::new(self.0.clone()))
    }
}

/// Convert a registry value into a field of type `T`
///
/// A `Value`-typed field accepts any registered value as is.
fn coerce<T: Opaque + Clone>(value: &Value) -> Result<T> {
    if let Some(same) = (value as &dyn Any).downcast_ref::<T>() {
        return Ok(same.clone());
    }
    value.extract::<T>()
}
