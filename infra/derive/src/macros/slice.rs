use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};

/// Splits `struct Name { .. }` into `NameInner { .. }` plus a cloneable `Name` handle.
///
/// The inner state only derives `Debug`: slices own locks and channels, which are
/// shared through the handle's `Arc` instead of being cloned.
pub fn expand_slice(input: ItemStruct) -> TokenStream {
    if !matches!(input.fields, Fields::Named(_)) {
        return syn::Error::new_spanned(&input.ident, "fhub_slice requires a struct with named fields")
            .to_compile_error();
    }

    let handle = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let inner = format_ident!("{handle}Inner");

    quote! {
        #(#attrs)*
        #[derive(Debug)]
        #vis struct #inner #fields

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: std::sync::Arc<#inner>,
        }

        impl #handle {
            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }

            /// Returns `true` when both handles point at the same slice state.
            #[must_use]
            pub fn same_slice(&self, other: &Self) -> bool {
                std::sync::Arc::ptr_eq(&self.inner, &other.inner)
            }
        }

        impl std::ops::Deref for #handle {
            type Target = #inner;
            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }
    }
}
