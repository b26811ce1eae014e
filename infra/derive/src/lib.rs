#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `FontHub` crates: error enums, feature slice handles
//! and the async runtime entry point.
//!
//! ## Usage
//! Add the crate under `dependencies` of the consuming crate inside the workspace:
//! ```toml
//! [dependencies]
//! fhub-derive.workspace = true
//! ```
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own macros;
//! working copies live in the consuming crates and in `tests/`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap a `fhub-runtime` Tokio runtime.
///
/// Turns an `async fn main` returning a `Result` into a plain `fn main` that builds the
/// runtime for the selected profile and blocks on the body.
///
/// # Arguments
///
/// * `default` - Multi-threaded runtime, workers auto-detected.
/// * `single_threaded` - Current-thread runtime; every task runs on the caller thread.
/// * `high_performance` - Larger stacks and longer keep-alive.
/// * `memory_efficient` - Half the workers and smaller stacks.
///
/// # Examples
///
/// ```rust,ignore
/// #[fhub_runtime::main(single_threaded)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines a crate error enum with context support.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type, and an inherent
///   `context_note()` accessor to read it back.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `#[source]`
///   field, enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source` field (or one marked
///    `#[source]`/`#[from]`) *and* a context field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[fhub_derive::fhub_error]
/// pub enum IngestError {
///     #[error("Only TTF files are allowed{}", format_context(.context))]
///     UnsupportedFileType { context: Option<Cow<'static, str>> },
///
///     #[error("Internal ingest error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn fhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// Transforms `struct Name { .. }` into:
/// 1. `NameInner { .. }` holding the fields (derives `Debug`).
/// 2. A cloneable `Name` handle wrapping `Arc<NameInner>` with `new` and `same_slice`.
/// 3. `Deref<Target = NameInner>` for transparent field access.
///
/// # Example
/// ```rust,ignore
/// #[fhub_derive::fhub_slice]
/// pub struct FontRegistry {
///     state: parking_lot::RwLock<RegistryState>,
/// }
///
/// let registry = FontRegistry::new(FontRegistryInner { state: Default::default() });
/// ```
#[proc_macro_attribute]
pub fn fhub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
