//! Procedural macros for injector.
//!
//! * `#[derive(Bindable)]` - describes tagged struct fields to the binder

use proc_macro::TokenStream;

mod bindable;

/// Derives `injector::Bindable` from field attributes.
///
/// Attributes:
/// * `#[injection = "key"]` / `#[injection("key")]` - copy the registry value at `key` into the field
/// * `#[infection = "key"]` / `#[infection("key")]` - copy the field into the registry under `key`
///
/// Untagged fields are ignored. `Option<T>` fields receive `Some(value)` on
/// injection and expose nothing while `None`. A field may not carry both
/// attributes.
///
/// ```ignore
/// #[derive(Bindable)]
/// struct Session {
///     #[injection = "db.pool"]
///     pool: Option<Arc<Pool>>,
///     #[infection = "session.id"]
///     id: String,
///     scratch: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Bindable, attributes(injection, infection))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    bindable::derive_bindable(input)
}
