use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, ReturnType, Type};

const PROFILES: &str = "default, single_threaded, high_performance, memory_efficient";

/// Expands the `#[fhub_runtime::main]` attribute macro.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.ident,
            "The #[fhub_runtime::main] attribute can only be used on async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "The #[fhub_runtime::main] attribute requires a Result return type",
        )
        .to_compile_error();
    }

    let profile = match profile_constructor(args) {
        Ok(profile) => profile,
        Err(err) => return err,
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #profile;
            let rt = ::fhub_runtime::build_runtime_with_config(&config)?;
            rt.block_on(async #block)
        }
    }
}

fn profile_constructor(args: TokenStream) -> Result<TokenStream, TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::fhub_runtime::RuntimeConfig::default() });
    }

    let ident: syn::Ident = syn::parse2(args).map_err(|err| err.to_compile_error())?;
    let constructor = match ident.to_string().as_str() {
        "default" => quote! { ::fhub_runtime::RuntimeConfig::default() },
        "single_threaded" => quote! { ::fhub_runtime::RuntimeConfig::single_threaded() },
        "high_performance" => quote! { ::fhub_runtime::RuntimeConfig::high_performance() },
        "memory_efficient" => quote! { ::fhub_runtime::RuntimeConfig::memory_efficient() },
        _ => {
            return Err(Error::new_spanned(
                ident,
                format!("Unknown runtime profile. Use one of: {PROFILES}"),
            )
            .to_compile_error());
        },
    };
    Ok(constructor)
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
