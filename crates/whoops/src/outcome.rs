// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::Error;

/// Text of the placeholder error reported by a successful [`Outcome`].
pub const SUCCESS_MESSAGE: &str = "Success";

static SUCCESS_ERROR: Error = Error::from_static(SUCCESS_MESSAGE);

/// Success, or failure carrying an [`Error`].
///
/// An `Outcome` has no payload. Success is the default state, and it is a distinct state rather
/// than a special error value. The error of a failure is boxed so that an `Outcome` stays one
/// pointer wide.
///
/// [`error()`](Self::error) can be called in either state: for success it returns a placeholder
/// error whose text is [`SUCCESS_MESSAGE`]. A real error with the text `"Success"` looks the same,
/// so use [`is_failure()`](Self::is_failure) to tell the two states apart.
///
/// # Examples
///
/// ```rust
/// use whoops::{Outcome, new_error};
///
/// fn check(ready: bool) -> Outcome {
///     if ready {
///         return Outcome::success();
///     }
///
///     Outcome::failure(new_error!("not ready"))
/// }
///
/// assert!(check(true).is_success());
///
/// let outcome = check(false);
/// assert!(outcome.is_failure());
/// assert!(outcome.error().text().ends_with("-> not ready"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Outcome {
    error: Option<Box<Error>>,
}

impl Outcome {
    /// The successful outcome.
    pub const SUCCESS: Self = Self::success();

    /// Returns a successful outcome.
    pub const fn success() -> Self {
        Self { error: None }
    }

    /// Returns a failed outcome carrying `error`.
    pub fn failure(error: Error) -> Self {
        Self {
            error: Some(Box::new(error)),
        }
    }

    /// Returns `true` if this outcome is a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Returns `true` if this outcome is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a copy of the carried error, or the [`SUCCESS_MESSAGE`] placeholder on success.
    #[must_use]
    pub fn error(&self) -> Error {
        self.error_ref().unwrap_or(&SUCCESS_ERROR).clone()
    }

    /// Returns the carried error, if any.
    #[must_use]
    pub fn error_ref(&self) -> Option<&Error> {
        self.error.as_deref()
    }

    pub(crate) fn error_mut(&mut self) -> Option<&mut Error> {
        self.error.as_deref_mut()
    }

    /// Moves the outcome out, leaving success in its place.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Converts into a standard [`Result`](std::result::Result), for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns the carried error if this outcome is a failure.
    pub fn into_result(self) -> crate::Result<()> {
        match self.error {
            Some(error) => Err(*error),
            None => Ok(()),
        }
    }
}

impl From<crate::Result<()>> for Outcome {
    fn from(result: crate::Result<()>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(error) => Self::failure(error),
        }
    }
}

impl From<Outcome> for crate::Result<()> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_result()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.error_ref().unwrap_or(&SUCCESS_ERROR), f)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_success() {
        let outcome = Outcome::default();
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.error().text(), SUCCESS_MESSAGE);
        assert!(outcome.error_ref().is_none());
    }

    #[test]
    fn success_constant() {
        let outcome = Outcome::SUCCESS;
        assert!(outcome.is_success());
        assert_eq!(outcome, Outcome::success());
    }

    #[test]
    fn failure_keeps_error_text() {
        let outcome = Outcome::failure(Error::new("some error"));
        assert!(outcome.is_failure());
        assert_eq!(outcome.error().text(), "some error");
    }

    #[test]
    fn failure_with_empty_text() {
        let outcome = Outcome::failure(Error::new(""));
        assert!(outcome.is_failure());
        assert_eq!(outcome.error().text(), "");
    }

    #[test]
    fn take_leaves_success() {
        let mut source = Outcome::failure(Error::new("moved"));
        let moved = source.take();
        assert!(source.is_success());
        assert_eq!(source.error().text(), SUCCESS_MESSAGE);
        assert_eq!(moved.error().text(), "moved");
    }

    #[test]
    fn result_round_trip() {
        let outcome = Outcome::from(Err::<(), _>(Error::new("nope")));
        assert!(outcome.is_failure());
        let result: crate::Result<()> = outcome.into();
        assert_eq!(result.unwrap_err().text(), "nope");

        assert!(Outcome::from(Ok(())).is_success());
        assert_eq!(Outcome::success().into_result(), Ok(()));
    }

    #[test]
    fn display() {
        assert_eq!(Outcome::success().to_string(), SUCCESS_MESSAGE);
        assert_eq!(Outcome::failure(Error::new("broken")).to_string(), "broken");
    }

    #[test]
    fn is_pointer_sized() {
        assert_eq!(size_of::<Outcome>(), size_of::<usize>());
    }
}
