//! Field binding: injection and infection
//!
//! The binder walks the [`FieldBinding`]s a [`Bindable`] value exposes and,
//! field by field, either copies a registry value into the field (injection)
//! or copies the field's value into the registry (infection).
//!
//! ## Per-field decision
//!
//! ```text
//! writable && injection key ──▶ invoke(key) ──▶ Some: assign   None: skip (AbsentKey)
//!        │ otherwise
//!        ▼
//! infection key ──▶ expose() ──▶ Some: register   None: skip (NotExposable)
//!        │ otherwise
//!        ▼
//! skip (Untagged / NotWritable)
//! ```
//!
//! A type mismatch while assigning stops the bind; fields handled before it
//! keep their new values.

mod binding;
mod report;
mod slot;

pub use binding::FieldBinding;
pub use report::{BindReport, BoundField, SkipReason, SkippedField};
pub use slot::{FieldSlot, OptionalSlot, ReadOnlySlot, Slot};

use crate::config::BinderConfig;
use crate::error::{Error, Result};
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// A value whose fields can be bound against a registry
///
/// Records return one [`FieldBinding`] per bindable field, in declaration
/// order. Anything else returns no bindings and binding it is a no-op.
/// Usually implemented with `#[derive(Bindable)]`.
///
/// # Rejected declarations
///
/// The derive refuses declarations the binder could not act on. A field may
/// carry only one direction:
///
/// ```compile_fail
/// use injector::Bindable;
///
/// #[derive(Bindable)]
/// struct Both {
///     #[injection = "shared.key"]
///     #[infection = "shared.key"]
///     value: String,
/// }
/// ```
///
/// and only one tag of it:
///
/// ```compile_fail
/// use injector::Bindable;
///
/// #[derive(Bindable)]
/// struct Repeated {
///     #[injection = "first"]
///     #[injection("second")]
///     value: u32,
/// }
/// ```
///
/// Keys must not be empty:
///
/// ```compile_fail
/// use injector::Bindable;
///
/// #[derive(Bindable)]
/// struct Empty {
///     #[infection = ""]
///     value: bool,
/// }
/// ```
///
/// Only structs have fields to bind:
///
/// ```compile_fail
/// use injector::Bindable;
///
/// #[derive(Bindable)]
/// enum Mode {
///     Fast,
///     Slow,
/// }
/// ```
///
/// ```compile_fail
/// use injector::Bindable;
///
/// #[derive(Bindable)]
/// union Bits {
///     int: u32,
///     float: f32,
/// }
/// ```
///
/// The same struct with a single, non-empty tag per field is accepted:
///
/// ```
/// use injector::Bindable;
///
/// #[derive(Bindable)]
/// struct Accepted {
///     #[injection = "shared.key"]
///     value: String,
/// }
/// ```
pub trait Bindable {
    /// Describe the bindable fields of `self`
    fn bindings(&mut self) -> Vec<FieldBinding<'_>>;
}

impl<T: Bindable + ?Sized> Bindable for &mut T {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        (**self).bindings()
    }
}

impl<T: Bindable + ?Sized> Bindable for Box<T> {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        (**self).bindings()
    }
}

impl<T: Bindable> Bindable for Option<T> {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        match self {
            Some(inner) => inner.bindings(),
            None => Vec::new(),
        }
    }
}

macro_rules! opaque_bindable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bindable for $ty {
                fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
                    Vec::new()
                }
            }
        )*
    };
}

opaque_bindable!(
    (),
    bool,
    char,
    str,
    &str,
    String,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

/// What to do with a field that carries both an injection and an infection key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Fail the bind before touching any field
    #[default]
    Reject,
    /// Treat the field as injection-only when it is writable, else as infection
    PreferInjection,
}

/// Binds records against a registry
#[derive(Debug, Clone)]
pub struct Binder {
    registry: Registry,
    policy: ConflictPolicy,
}

impl Binder {
    /// Create a binder over `registry` with the default policy
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            policy: ConflictPolicy::default(),
        }
    }

    /// Create a binder over `registry` configured by `config`
    pub fn from_config(registry: Registry, config: &BinderConfig) -> Self {
        Self::new(registry).with_policy(config.conflict_policy)
    }

    /// Set the conflicting-tag policy
    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Registry this binder reads from and writes to
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Conflicting-tag policy in use
    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Bind every field of `target` in one pass
    pub fn bind<B: Bindable + ?Sized>(&self, target: &mut B) -> Result<BindReport> {
        let mut report = BindReport::default();
        let bindings = target.bindings();
        if bindings.is_empty() {
            trace!("Target exposes no bindable fields");
            return Ok(report);
        }

        if self.policy == ConflictPolicy::Reject {
            reject_conflicts(&bindings)?;
        }

        for mut binding in bindings {
            self.bind_field(&mut binding, &mut report)?;
        }

        debug!(
            injected = report.injected.len(),
            infected = report.infected.len(),
            skipped = report.skipped.len(),
            "Bound target"
        );
        Ok(report)
    }

    fn bind_field(&self, binding: &mut FieldBinding<'_>, report: &mut BindReport) -> Result<()> {
        let field = binding.name();

        if binding.is_writable()
            && let Some(key) = binding.injection_key().map(str::to_owned)
        {
            match self.registry.invoke(&key) {
                Some(value) => {
                    binding
                        .assign(&value)
                        .map_err(|err| mismatch(err, field, &key, binding.type_name()))?;
                    trace!(field, key = %key, "Injected field");
                    report.record_injected(field, key);
                }
                None => skip(report, field, SkipReason::AbsentKey(key)),
            }
            return Ok(());
        }

        if let Some(key) = binding.infection_key().map(str::to_owned) {
            match binding.expose() {
                Some(value) => {
                    self.registry.register_value(key.clone(), value);
                    trace!(field, key = %key, "Infected registry");
                    report.record_infected(field, key);
                }
                None => skip(report, field, SkipReason::NotExposable(key)),
            }
            return Ok(());
        }

        let reason = if binding.injection_key().is_some() {
            SkipReason::NotWritable
        } else {
            SkipReason::Untagged
        };
        skip(report, field, reason);
        Ok(())
    }
}

fn reject_conflicts(bindings: &[FieldBinding<'_>]) -> Result<()> {
    for binding in bindings {
        if let (Some(injection), Some(infection)) =
            (binding.injection_key(), binding.infection_key())
        {
            warn!(
                field = binding.name(),
                injection, infection, "Field declares both injection and infection"
            );
            return Err(Error::conflicting_tags(binding.name(), injection, infection));
        }
    }
    Ok(())
}

fn skip(report: &mut BindReport, field: &'static str, reason: SkipReason) {
    trace!(field, reason = ?reason, "Skipped field");
    report.record_skipped(field, reason);
}

fn mismatch(err: Error, field: &str, key: &str, expected: &'static str) -> Error {
    match err {
        Error::Downcast { found, .. } => {
            warn!(field, key, expected, found, "Registered value does not fit field");
            Error::field_type_mismatch(field, key, expected, found)
        }
        other => other,
    }
}
