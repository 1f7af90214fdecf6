// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Macros for the [whoops](https://docs.rs/whoops) crate.
//!
//! This crate is an implementation detail of `whoops`. Use the macros through their re-exports
//! in `whoops` instead of depending on this crate directly.

#![doc(html_logo_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/whoops_macros/logo.png")]
#![doc(html_favicon_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/whoops_macros/favicon.ico")]

use proc_macro::TokenStream;

mod traced;
mod utils;

/// Attribute macro that appends a trace record to every error leaving a function.
///
/// The function must return a type implementing `whoops::Traceable`: `Error`, `Outcome`,
/// `Optional<T>` or a `Result` whose error is `Traceable`. The record names the function and the
/// line of the attribute. An optional note accepts the same arguments as `format!`:
///
/// - `#[traced]`
/// - `#[traced("loading {path}")]`
/// - `#[traced("attempt {} of {}", attempt, max)]`
///
/// The note is formatted after the body has run. It can refer to borrowed and `Copy`
/// parameters, but not to a parameter the body takes by value.
///
/// See the main `whoops` crate documentation for detailed usage examples.
#[proc_macro_attribute]
#[cfg_attr(test, mutants::skip)]
pub fn traced(args: TokenStream, input: TokenStream) -> TokenStream {
    traced::traced(args, input)
}
