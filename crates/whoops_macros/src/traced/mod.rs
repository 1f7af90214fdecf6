// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, ItemFn, Lit, Result, Token, parse_macro_input};

use crate::utils::bail;

/// Attribute macro that traces every error returned by the annotated function.
///
/// The body runs first and the note is formatted afterwards, so the note can only refer to
/// parameters the body does not consume. Borrowed parameters and `Copy` values are fine.
///
/// Supported forms:
/// - `#[traced]`
/// - `#[traced("simple note")]`
/// - `#[traced("note with {param}")]`
/// - `#[traced("note with {}", expr)]`
#[cfg_attr(test, mutants::skip)] // procedural macro API cannot be used in tests directly
pub fn traced(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    let input = parse_macro_input!(input as ItemFn);

    impl_traced_attribute(args, input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn impl_traced_attribute(note_args: proc_macro2::TokenStream, mut fn_definition: ItemFn) -> Result<proc_macro2::TokenStream> {
    let note_expr = if note_args.is_empty() {
        None
    } else {
        Some(generate_note_expr(note_args)?)
    };

    let syn::ReturnType::Type(_, return_type) = &fn_definition.sig.output else {
        bail!(
            fn_definition.sig.span(),
            "traced can only be applied to functions returning Error, Outcome, Optional or Result"
        );
    };

    let fn_name = &fn_definition.sig.ident;
    let asyncness = &fn_definition.sig.asyncness;
    let await_suffix = asyncness.is_some().then(|| quote! { .await });
    let body = &fn_definition.block;

    let traced_call = match note_expr {
        None => quote! {
            whoops::TraceableExt::trace_at(
                (#asyncness || -> #return_type #body)() #await_suffix,
                &__whoops_site,
            )
        },
        Some(note_expr) => quote! {
            whoops::TraceableExt::annotate_at_with(
                (#asyncness || -> #return_type #body)() #await_suffix,
                &__whoops_site,
                || #note_expr,
            )
        },
    };

    let block = quote! {
        {
            let __whoops_site = whoops::Site::new(file!(), stringify!(#fn_name), line!());
            #traced_call
        }
    };

    fn_definition.block = syn::parse2(block)?;

    Ok(quote! { #fn_definition })
}

/// Builds the note expression from the attribute arguments.
///
/// The arguments are a format string followed by optional format arguments, exactly as for
/// `format!`. A string without placeholders and without arguments is used as is.
fn generate_note_expr(args_stream: proc_macro2::TokenStream) -> Result<proc_macro2::TokenStream> {
    let mut parts = Punctuated::<Expr, Token![,]>::parse_terminated.parse2(args_stream)?.into_iter();

    let Some(first) = parts.next() else {
        bail!("traced note is empty, use #[traced] to trace without a note");
    };
    let Expr::Lit(ExprLit { lit: Lit::Str(template), .. }) = &first else {
        bail!(first.span(), "traced note must start with a string literal, as in #[traced(\"loading {path}\")]");
    };

    let arguments: Vec<Expr> = parts.collect();
    if arguments.is_empty() && !template.value().contains(['{', '}']) {
        return Ok(quote! { #template });
    }

    Ok(quote! { format!(#template #(, #arguments)*) })
}
