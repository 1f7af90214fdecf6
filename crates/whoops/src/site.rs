// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// The code location a trace record points at: file, enclosing function and line.
///
/// A `Site` is usually produced by the [`site!`](crate::site) macro, which fills in all three
/// parts for the place where it is expanded. It renders as `<file>:<function>():<line>`.
///
/// # Examples
///
/// ```rust
/// use whoops::Site;
///
/// let site = Site::new("src/config.rs", "load", 42);
/// assert_eq!(site.to_string(), "src/config.rs:load():42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    /// File containing the site.
    pub file: &'static str,
    /// Name of the function the site belongs to, without its module path.
    pub function: &'static str,
    /// Line number of the site.
    pub line: u32,
}

impl Site {
    /// Creates a site from its parts.
    #[must_use]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self { file, function, line }
    }

    /// Creates a site for the caller of the current function.
    ///
    /// File and line come from [`Location::caller`](std::panic::Location::caller). The function
    /// name is not available that way, so the caller supplies a label for it. Accessors that fail
    /// on behalf of their caller pass their own name.
    #[must_use]
    #[track_caller]
    pub fn caller(function: &'static str) -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), function, location.line())
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}():{}", self.file, self.function, self.line)
    }
}

/// Reduces the type name of an item nested in a function to the function's bare name.
///
/// `type_name` of such an item looks like `my_crate::module::function::{{closure}}::marker`.
#[doc(hidden)]
#[must_use]
pub fn function_name(nested_item_type_name: &'static str) -> &'static str {
    let mut path = nested_item_type_name
        .rsplit_once("::")
        .map_or(nested_item_type_name, |(parent, _)| parent);

    while let Some(parent) = path.strip_suffix("::{{closure}}") {
        path = parent;
    }

    path.rsplit_once("::").map_or(path, |(_, name)| name)
}
