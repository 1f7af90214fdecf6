// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::ops::{Deref, DerefMut};

use crate::{AccessError, Error, Site};

/// Text of the placeholder error reported by an [`Optional`] that holds a value.
pub const HAS_VALUE_MESSAGE: &str = "Has value";

/// Note recorded in an [`Optional`] whose value was moved out by [`Optional::release`] or
/// [`Optional::take`].
pub const RELEASED_MESSAGE: &str = "Value released";

static HAS_VALUE_ERROR: Error = Error::from_static(HAS_VALUE_MESSAGE);

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<T> {
    Value(T),
    Error(Box<Error>),
}

/// A value of type `T`, or the [`Error`] explaining why there is none.
///
/// Exactly one of the two is held at any time. The state only changes when the whole
/// optional is replaced or one of the assignment methods is called. Each of those drops what
/// was held before.
///
/// Reading the value of an optional in its error state is a bug in the caller, not an ordinary
/// failure. [`value()`](Self::value), [`value_mut()`](Self::value_mut), [`release()`](Self::release)
/// and dereferencing all panic in that case. The panic message is the stored error text,
/// followed by a trace record for the access site and [`BAD_ACCESS_MESSAGE`](crate::BAD_ACCESS_MESSAGE).
/// Code that wants to check instead of panicking uses the `try_` variants, which return an
/// [`AccessError`] with the same text.
///
/// # Examples
///
/// ```rust
/// use whoops::{Optional, new_error, trace};
///
/// fn multiply(lhs: usize, rhs: usize) -> Optional<usize> {
///     if lhs == rhs {
///         return Optional::of_error(new_error!("lhs and rhs cannot be the same value"));
///     }
///
///     Optional::of(lhs * rhs)
/// }
///
/// fn square_sum(values: &[usize]) -> Optional<usize> {
///     let mut sum = 0;
///     for &value in values {
///         let product = multiply(value, value + 1);
///         if product.has_error() {
///             return trace!(Optional::of_error(product.error()));
///         }
///         sum += *product;
///     }
///     Optional::of(sum)
/// }
///
/// assert_eq!(*square_sum(&[1, 2]).value(), 8);
/// assert!(multiply(3, 3).error().text().contains("cannot be the same value"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Optional<T> {
    state: State<T>,
}

impl<T> Optional<T> {
    /// Creates an optional holding `value`.
    pub const fn of(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// Creates an optional holding `error`.
    pub fn of_error(error: Error) -> Self {
        Self {
            state: State::Error(Box::new(error)),
        }
    }

    /// Replaces whatever is held with `value`.
    pub fn set_value(&mut self, value: T) {
        self.state = State::Value(value);
    }

    /// Replaces whatever is held with `error`.
    pub fn set_error(&mut self, error: Error) {
        self.state = State::Error(Box::new(error));
    }

    /// Returns `true` if a value is held.
    #[must_use]
    pub fn has_value(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// Returns `true` if an error is held.
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if an error is held. The message contains the stored error text.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        self.get("value")
    }

    /// Returns the held value mutably.
    ///
    /// # Panics
    ///
    /// Panics if an error is held. The message contains the stored error text.
    #[must_use]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        self.get_mut("value_mut")
    }

    /// Returns the held value, or an [`AccessError`] if an error is held.
    ///
    /// # Errors
    ///
    /// Returns an error if the optional holds an error instead of a value.
    #[track_caller]
    pub fn try_value(&self) -> Result<&T, AccessError> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Error(error) => Err(AccessError::new(error, &Site::caller("try_value"))),
        }
    }

    /// Returns the held value mutably, or an [`AccessError`] if an error is held.
    ///
    /// # Errors
    ///
    /// Returns an error if the optional holds an error instead of a value.
    #[track_caller]
    pub fn try_value_mut(&mut self) -> Result<&mut T, AccessError> {
        match &mut self.state {
            State::Value(value) => Ok(value),
            State::Error(error) => Err(AccessError::new(error, &Site::caller("try_value_mut"))),
        }
    }

    /// Moves the held value out.
    ///
    /// Afterwards the optional holds an error whose text is a fresh trace chain started at the
    /// call site with [`RELEASED_MESSAGE`], so any later read fails loudly.
    ///
    /// # Panics
    ///
    /// Panics if an error is held. The optional is left unchanged before panicking.
    #[track_caller]
    pub fn release(&mut self) -> T {
        match self.release_at(Site::caller("release")) {
            Ok(value) => value,
            Err(error) => error.raise(),
        }
    }

    /// Moves the held value out, or returns an [`AccessError`] if an error is held.
    ///
    /// On success the optional is left as described for [`release()`](Self::release). On failure
    /// it is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the optional holds an error instead of a value.
    #[track_caller]
    pub fn try_release(&mut self) -> Result<T, AccessError> {
        self.release_at(Site::caller("try_release"))
    }

    /// Consumes the optional and returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if an error is held. The message contains the stored error text.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Value(value) => value,
            State::Error(error) => AccessError::new(&error, &Site::caller("into_value")).raise(),
        }
    }

    /// Moves the whole optional out, leaving the released state of [`release()`](Self::release)
    /// in its place.
    #[track_caller]
    pub fn take(&mut self) -> Self {
        let released = Error::new_at(&Site::caller("take"), RELEASED_MESSAGE);
        std::mem::replace(self, Self::of_error(released))
    }

    /// Returns a copy of the held error, or the [`HAS_VALUE_MESSAGE`] placeholder when a value is held.
    ///
    /// A real error with the text `"Has value"` looks the same, so use
    /// [`has_error()`](Self::has_error) to tell the two states apart.
    #[must_use]
    pub fn error(&self) -> Error {
        self.error_ref().unwrap_or(&HAS_VALUE_ERROR).clone()
    }

    /// Returns the held error, if any.
    #[must_use]
    pub fn error_ref(&self) -> Option<&Error> {
        match &self.state {
            State::Value(_) => None,
            State::Error(error) => Some(error),
        }
    }

    pub(crate) fn error_mut(&mut self) -> Option<&mut Error> {
        match &mut self.state {
            State::Value(_) => None,
            State::Error(error) => Some(error),
        }
    }

    /// Transforms the held value, keeping an error as is.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Value(value) => Optional::of(f(value)),
            State::Error(error) => Optional { state: State::Error(error) },
        }
    }

    /// Converts into a standard [`Result`](std::result::Result), for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns the held error if there is no value.
    pub fn into_result(self) -> crate::Result<T> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Error(error) => Err(*error),
        }
    }

    #[track_caller]
    fn get(&self, function: &'static str) -> &T {
        match &self.state {
            State::Value(value) => value,
            State::Error(error) => AccessError::new(error, &Site::caller(function)).raise(),
        }
    }

    #[track_caller]
    fn get_mut(&mut self, function: &'static str) -> &mut T {
        match &mut self.state {
            State::Value(value) => value,
            State::Error(error) => AccessError::new(error, &Site::caller(function)).raise(),
        }
    }

    fn release_at(&mut self, site: Site) -> Result<T, AccessError> {
        let released = State::Error(Box::new(Error::new_at(&site, RELEASED_MESSAGE)));

        match std::mem::replace(&mut self.state, released) {
            State::Value(value) => {
                #[cfg(feature = "logs")]
                tracing::event!(tracing::Level::DEBUG, %site, "value released from optional");

                Ok(value)
            }
            State::Error(error) => {
                let access_error = AccessError::new(&error, &site);
                self.state = State::Error(error);
                Err(access_error)
            }
        }
    }
}

impl<T> Deref for Optional<T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        self.get("deref")
    }
}

impl<T> DerefMut for Optional<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut("deref_mut")
    }
}

impl<T> From<crate::Result<T>> for Optional<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => Self::of(value),
            Err(error) => Self::of_error(error),
        }
    }
}

impl<T> From<Optional<T>> for crate::Result<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_result()
    }
}
