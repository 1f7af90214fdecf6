// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test utilities for the whoops crate.
//!
//! This module is only available when the `test-util` feature is enabled.

/// Returns the notes of all annotated trace records in `text`, oldest first.
///
/// Trace records without a note and lines that are not trace records are skipped. This makes
/// assertions independent of file names and line numbers.
#[must_use]
pub fn trace_notes(text: &str) -> Vec<&str> {
    text.lines().filter_map(record_note).flatten().collect()
}

/// Splits a `<file>:<function>():<line>[ -> <note>]` record into its note.
fn record_note(line: &str) -> Option<Option<&str>> {
    let (_, rest) = line.split_once("():")?;
    let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits == 0 {
        return None;
    }

    match rest.get(digits..) {
        Some("") => Some(None),
        Some(tail) => tail.strip_prefix(" -> ").map(Some),
        None => None,
    }
}

/// Assert that the annotated trace records of an error carry exactly the expected notes.
///
/// The first argument is anything with a [`Display`](std::fmt::Display) implementation whose
/// output is an error text: [`Error`](crate::Error), [`Outcome`](crate::Outcome) or
/// [`AccessError`](crate::AccessError).
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")]
/// # {
/// use whoops::{annotate, assert_notes, new_error, trace};
///
/// let error = annotate!(trace!(new_error!("disk full")), "saving settings");
/// assert_notes!(error, ["disk full", "saving settings"]);
/// # }
/// ```
#[macro_export]
#[cfg_attr(coverage_nightly, coverage(off))] // coverage doesn't handle panics well
macro_rules! assert_notes {
    ($error:expr, [$($note:expr),* $(,)?]) => {{
        let text = ::std::string::ToString::to_string(&$error);
        let actual = $crate::test_util::trace_notes(&text);
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($note),*];
        assert_eq!(actual, expected, "unexpected trace notes in:\n{text}");
    }};
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Site};

    #[test]
    fn notes_in_order() {
        let error = Error::new_at(&Site::new("a.rs", "f", 1), "first")
            .trace(&Site::new("b.rs", "g", 2))
            .annotate(&Site::new("c.rs", "h", 3), "second");
        assert_eq!(trace_notes(error.text()), ["first", "second"]);
    }

    #[test]
    fn plain_lines_are_skipped() {
        assert!(trace_notes("not a record\nf():x").is_empty());
        assert!(trace_notes("a.rs:f():12").is_empty());
    }

    #[test]
    fn empty_note_is_kept() {
        assert_eq!(trace_notes("\na.rs:f():1 -> "), [""]);
    }

    #[test]
    fn assert_notes_matches() {
        let error = Error::new_at(&Site::new("a.rs", "f", 1), "only");
        assert_notes!(error, ["only"]);
    }

    #[test]
    #[should_panic(expected = "unexpected trace notes")]
    fn assert_notes_mismatch() {
        let error = Error::new_at(&Site::new("a.rs", "f", 1), "actual");
        assert_notes!(error, ["expected"]);
    }
}
