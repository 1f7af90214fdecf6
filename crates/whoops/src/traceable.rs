// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Display;

use crate::{Error, Optional, Outcome, Site};

/// Base trait for values that may carry an [`Error`] worth tracing.
///
/// This trait is dyn-compatible and only exposes the error, if there is one. The tracing
/// methods live on [`TraceableExt`], which every implementor gets for free.
///
/// # Note
///
/// This method is not intended to be used directly. Instead, use:
/// - The [`trace!`](crate::trace) and [`annotate!`](crate::annotate) macros
/// - The [`#[traced]`](crate::traced) attribute
/// - Methods from [`TraceableExt`]
pub trait Traceable {
    /// Returns the carried error, or `None` for a successful value.
    fn trace_target(&mut self) -> Option<&mut Error>;
}

impl Traceable for Error {
    fn trace_target(&mut self) -> Option<&mut Error> {
        Some(self)
    }
}

impl Traceable for Outcome {
    fn trace_target(&mut self) -> Option<&mut Error> {
        self.error_mut()
    }
}

impl<T> Traceable for Optional<T> {
    fn trace_target(&mut self) -> Option<&mut Error> {
        self.error_mut()
    }
}

impl<T, E> Traceable for Result<T, E>
where
    E: Traceable,
{
    fn trace_target(&mut self) -> Option<&mut Error> {
        self.as_mut().err().and_then(Traceable::trace_target)
    }
}

/// Extension trait that appends trace records to whatever error a [`Traceable`] carries.
///
/// Successful values pass through unchanged.
pub trait TraceableExt: Traceable {
    /// Appends a trace record for `site`.
    #[must_use]
    fn trace_at(mut self, site: &Site) -> Self
    where
        Self: Sized,
    {
        if let Some(error) = self.trace_target() {
            error.push_trace(site);
        }
        self
    }

    /// Appends a trace record for `site` with `note`.
    #[must_use]
    fn annotate_at(mut self, site: &Site, note: impl Display) -> Self
    where
        Self: Sized,
    {
        if let Some(error) = self.trace_target() {
            error.push_annotation(site, note);
        }
        self
    }

    /// Appends a trace record for `site` with a lazily computed note.
    ///
    /// `note` is only called when there is an error to annotate.
    #[must_use]
    fn annotate_at_with<F, D>(mut self, site: &Site, note: F) -> Self
    where
        F: FnOnce() -> D,
        D: Display,
        Self: Sized,
    {
        if let Some(error) = self.trace_target() {
            error.push_annotation(site, note());
        }
        self
    }
}

// Blanket implementation: all types that implement Traceable automatically get TraceableExt
impl<T: Traceable> TraceableExt for T {}

/// Builds a failed value from an [`Error`].
///
/// This lets [`bail!`](crate::bail) return early from functions returning [`Error`], [`Outcome`],
/// [`Optional`] or a [`Result`] whose error type converts from [`Error`].
pub trait FromError {
    /// Wraps `error` as a failure.
    fn from_error(error: Error) -> Self;
}

impl FromError for Error {
    fn from_error(error: Error) -> Self {
        error
    }
}

impl FromError for Outcome {
    fn from_error(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> FromError for Optional<T> {
    fn from_error(error: Error) -> Self {
        Self::of_error(error)
    }
}

impl<T, E> FromError for Result<T, E>
where
    E: From<Error>,
{
    fn from_error(error: Error) -> Self {
        Err(error.into())
    }
}
