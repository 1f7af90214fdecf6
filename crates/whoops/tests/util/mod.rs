// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Utilities for testing trace chains.

/// Asserts that the trace records of an error match the expected ones.
///
/// Each record is compared as `<function>()` or `<function>() -> <note>`. The file and line
/// number are stripped before comparison and lines that are not trace records are ignored.
///
/// # Example
///
/// ```
/// fn load() -> Error {
///     new_error!("disk full")
/// }
///
/// assert_trace!(trace!(load()), ["load() -> disk full", "caller()"]);
/// ```
#[macro_export]
macro_rules! assert_trace {
    ($error:expr, [$($record:expr),* $(,)?]) => {{
        let text = format!("{}", $error);

        let re = regex::Regex::new(r"^.+:(\w+)\(\):\d+((?: -> .*)?)$").unwrap();
        let records: Vec<String> = text
            .lines()
            .filter_map(|line| re.captures(line))
            .map(|captures| format!("{}(){}", &captures[1], &captures[2]))
            .collect();

        let expected: Vec<String> = vec![$(($record).to_string()),*];
        assert_eq!(records, expected, "unexpected trace records in:\n{text}");
    }};
}
