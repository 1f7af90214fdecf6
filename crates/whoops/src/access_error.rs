// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::{Error, Site};

/// Note appended to the stored error when an [`Optional`](crate::Optional) is read in its error state.
pub const BAD_ACCESS_MESSAGE: &str = "Bad optional access";

/// A value was requested from an [`Optional`](crate::Optional) that holds an error.
///
/// The wrapped [`Error`] is the one the optional held, annotated with the access site and
/// [`BAD_ACCESS_MESSAGE`]. The panicking accessors use this text as their panic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError {
    error: Error,
}

impl AccessError {
    pub(crate) fn new(stored: &Error, site: &Site) -> Self {
        Self {
            error: stored.clone().annotate(site, BAD_ACCESS_MESSAGE),
        }
    }

    /// Returns the annotated error.
    #[must_use]
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Consumes the access error and returns the annotated error.
    #[must_use]
    pub fn into_error(self) -> Error {
        self.error
    }

    #[cold]
    #[track_caller]
    #[expect(clippy::panic, reason = "reading a value that is not there is a logic error in the caller")]
    pub(crate) fn raise(self) -> ! {
        #[cfg(feature = "logs")]
        tracing::event!(tracing::Level::ERROR, error = %self.error, "bad optional access");

        panic!("{}", self.error)
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for AccessError {}

impl From<AccessError> for Error {
    fn from(error: AccessError) -> Self {
        error.into_error()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotates_stored_error() {
        let stored = Error::new("bad input");
        let error = AccessError::new(&stored, &Site::new("src/main.rs", "value", 5));
        assert_eq!(error.to_string(), "bad input\nsrc/main.rs:value():5 -> Bad optional access");
        assert_eq!(stored.text(), "bad input");
    }

    #[test]
    fn converts_into_error() {
        let error = AccessError::new(&Error::new("x"), &Site::new("a.rs", "value", 1));
        let text = error.to_string();
        assert_eq!(Error::from(error).text(), text);
    }

    #[test]
    #[should_panic(expected = "bad input\nsrc/main.rs:value():5 -> Bad optional access")]
    fn raise_panics_with_text() {
        AccessError::new(&Error::new("bad input"), &Site::new("src/main.rs", "value", 5)).raise();
    }
}
