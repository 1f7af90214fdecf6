// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Call-site macros for building and extending trace chains.

/// Builds a [`Site`](crate::Site) for the place where the macro is expanded.
///
/// The function name is that of the innermost enclosing `fn`. Closures and async blocks are
/// attributed to the function they appear in.
///
/// # Examples
///
/// ```rust
/// fn load() -> whoops::Site {
///     whoops::site!()
/// }
///
/// assert_eq!(load().function, "load");
/// ```
#[macro_export]
macro_rules! site {
    () => {
        $crate::Site::new(::core::file!(), $crate::function_name!(), ::core::line!())
    };
}

/// Expands to the name of the enclosing function, without its module path.
#[doc(hidden)]
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __whoops_marker() {}
        fn __whoops_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::__private::function_name(__whoops_type_name_of(__whoops_marker))
    }};
}

/// Starts a new trace chain at the current site.
///
/// Accepts the same arguments as [`format!`]. The resulting text is
/// `"\n<file>:<function>():<line> -> <message>"`, which is never empty.
///
/// # Examples
///
/// ```rust
/// use whoops::new_error;
///
/// let path = "/etc/app.toml";
/// let error = new_error!("cannot open {path}");
/// assert!(error.text().ends_with("-> cannot open /etc/app.toml"));
/// ```
#[macro_export]
macro_rules! new_error {
    ($($arg:tt)+) => {
        $crate::Error::new_at(&$crate::site!(), ::std::format_args!($($arg)+))
    };
}

/// Appends a trace record for the current site.
///
/// Works on an [`Error`](crate::Error) and on anything else implementing
/// [`Traceable`](crate::Traceable): [`Outcome`](crate::Outcome), [`Optional`](crate::Optional)
/// and `Result<T, E: Traceable>`. Successful values pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use whoops::{new_error, trace};
///
/// let error = new_error!("lost connection");
/// let before = error.text().to_owned();
/// let error = trace!(error);
/// assert!(error.text().starts_with(&before));
/// assert!(error.text().len() > before.len());
/// ```
#[macro_export]
macro_rules! trace {
    ($traceable:expr $(,)?) => {
        $crate::TraceableExt::trace_at($traceable, &$crate::site!())
    };
}

/// Appends a trace record for the current site together with a note.
///
/// The note accepts the same arguments as [`format!`] and is only formatted when there is an
/// error to annotate.
///
/// # Examples
///
/// ```rust
/// use whoops::{Outcome, annotate, new_error};
///
/// let attempt = 3;
/// let outcome = annotate!(Outcome::failure(new_error!("timed out")), "attempt {attempt}");
/// assert!(outcome.error().text().ends_with("-> attempt 3"));
/// ```
#[macro_export]
macro_rules! annotate {
    ($traceable:expr, $($arg:tt)+) => {
        $crate::TraceableExt::annotate_at_with($traceable, &$crate::site!(), || ::std::format!($($arg)+))
    };
}

/// Joins two errors, then appends a trace record for the current site.
///
/// # Examples
///
/// ```rust
/// use whoops::{concat_errors, new_error};
///
/// let error = concat_errors!(new_error!("A"), new_error!("B"));
/// let text = error.text();
/// assert!(text.find("-> A").unwrap() < text.find("-> B").unwrap());
/// ```
#[macro_export]
macro_rules! concat_errors {
    ($first:expr, $second:expr $(,)?) => {
        $crate::Error::concat($first, $second, &$crate::site!())
    };
}

/// Returns early with a new trace chain started at the current site.
///
/// Works in functions returning [`Error`](crate::Error), [`Outcome`](crate::Outcome),
/// [`Optional`](crate::Optional) or a `Result` whose error converts from [`Error`](crate::Error).
///
/// # Examples
///
/// ```rust
/// use whoops::{Optional, bail};
///
/// fn parse_port(text: &str) -> Optional<u16> {
///     match text.parse() {
///         Ok(port) => Optional::of(port),
///         Err(_) => bail!("invalid port: {text}"),
///     }
/// }
///
/// assert!(parse_port("http").has_error());
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return $crate::FromError::from_error($crate::new_error!($($arg)+))
    };
}
