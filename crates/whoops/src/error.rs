// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::Site;

/// A failure's diagnostic history: a message plus the trace records appended to it.
///
/// The text is a single owned buffer. Tracing an error appends `"\n<file>:<function>():<line>"`
/// to it, and annotating appends `" -> <note>"` after the record. Both operations only append,
/// so everything an error said before it was traced is still a prefix of what it says after.
///
/// Construction is explicit. There is no `From<&str>` or `From<String>` for `Error`, so a
/// function returning [`Optional<String>`](crate::Optional) can never turn its success payload
/// into an error by accident.
///
/// # Examples
///
/// ```rust
/// use whoops::{Error, Site};
///
/// let site = Site::new("src/disk.rs", "flush", 10);
/// let error = Error::new_at(&site, "disk full");
/// assert_eq!(error.text(), "\nsrc/disk.rs:flush():10 -> disk full");
///
/// let caller = Site::new("src/app.rs", "save", 22);
/// let error = error.annotate(&caller, "saving settings");
/// assert_eq!(
///     error.text(),
///     "\nsrc/disk.rs:flush():10 -> disk full\nsrc/app.rs:save():22 -> saving settings"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    message: Cow<'static, str>,
}

impl Error {
    /// Creates an error holding exactly `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Cow::Owned(message.into()),
        }
    }

    /// Creates an error that borrows a static message. Usable in `const` contexts.
    #[must_use]
    pub const fn from_static(message: &'static str) -> Self {
        Self {
            message: Cow::Borrowed(message),
        }
    }

    /// Starts a new trace chain at `site` with the given message.
    ///
    /// This is the same as annotating a blank error, so the text is never empty even when
    /// `message` is.
    #[must_use]
    pub fn new_at(site: &Site, message: impl fmt::Display) -> Self {
        Self::from_static("").annotate(site, message)
    }

    /// Returns the stored text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.message
    }

    /// Returns the stored text for in-place editing.
    ///
    /// Editing one error never affects another, even if one was cloned from the other.
    pub fn text_mut(&mut self) -> &mut String {
        self.message.to_mut()
    }

    /// Consumes the error and returns its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.message.into_owned()
    }

    /// Appends a trace record for `site`.
    #[must_use]
    pub fn trace(mut self, site: &Site) -> Self {
        self.push_trace(site);
        self
    }

    /// Appends a trace record for `site` followed by `" -> "` and `note`.
    #[must_use]
    pub fn annotate(mut self, site: &Site, note: impl fmt::Display) -> Self {
        self.push_annotation(site, note);
        self
    }

    /// Joins two independent errors, then traces the result at `site`.
    ///
    /// The text of `first` comes before the text of `second`.
    #[must_use]
    #[expect(clippy::needless_pass_by_value, reason = "concatenation consumes both errors it merges")]
    pub fn concat(mut first: Self, second: Self, site: &Site) -> Self {
        first.text_mut().push_str(second.text());
        first.trace(site)
    }

    pub(crate) fn push_trace(&mut self, site: &Site) {
        // Writing into a String cannot fail.
        let _ = write!(self.text_mut(), "\n{site}");
    }

    pub(crate) fn push_annotation(&mut self, site: &Site, note: impl fmt::Display) {
        let _ = write!(self.text_mut(), "\n{site} -> {note}");
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl AsRef<str> for Error {
    fn as_ref(&self) -> &str {
        self.text()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    const SITE: Site = Site::new("src/lib.rs", "run", 3);

    #[test]
    fn new_keeps_text_verbatim() {
        let error = Error::new("  spaced\tout\n");
        assert_eq!(error.text(), "  spaced\tout\n");
    }

    #[test]
    fn from_static_is_const() {
        const STATIC: Error = Error::from_static("static");
        assert_eq!(STATIC.text(), "static");
    }

    #[test]
    fn new_at_with_empty_message_is_not_empty() {
        let error = Error::new_at(&SITE, "");
        assert_eq!(error.text(), "\nsrc/lib.rs:run():3 -> ");
    }

    #[test]
    fn trace_appends_record() {
        let error = Error::new("base").trace(&SITE);
        assert_eq!(error.text(), "base\nsrc/lib.rs:run():3");
    }

    #[test]
    fn annotate_appends_record_and_note() {
        let error = Error::new("base").annotate(&SITE, format_args!("step {}", 2));
        assert_eq!(error.text(), "base\nsrc/lib.rs:run():3 -> step 2");
    }

    #[test]
    fn concat_keeps_order() {
        let first = Error::new_at(&SITE, "A");
        let second = Error::new_at(&SITE, "B");
        let joined = Error::concat(first, second, &Site::new("src/main.rs", "main", 9));
        assert_eq!(
            joined.text(),
            "\nsrc/lib.rs:run():3 -> A\nsrc/lib.rs:run():3 -> B\nsrc/main.rs:main():9"
        );
    }

    #[test]
    fn text_mut_edits_in_place() {
        let mut error = Error::from_static("static");
        error.text_mut().push('!');
        assert_eq!(error.text(), "static!");
    }

    #[test]
    fn clones_are_independent() {
        let original = Error::new("message");
        let mut copy = original.clone();
        copy.text_mut().push_str(" changed");
        assert_eq!(original.text(), "message");
        assert_eq!(copy.text(), "message changed");
    }

    #[test]
    fn display_matches_text() {
        let error = Error::new("shown").trace(&SITE);
        assert_eq!(error.to_string(), error.text());
        assert_eq!(error.clone().into_text(), error.text());
    }
}
