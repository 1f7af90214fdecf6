// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Trace chains built with the call-site macros.

use whoops::{Error, Result, annotate, bail, concat_errors, new_error, trace};

#[macro_use]
mod util;

fn open_file(path: &str) -> Error {
    new_error!("cannot open {path}")
}

fn load_settings() -> Error {
    trace!(open_file("settings.toml"))
}

fn start_service() -> Error {
    annotate!(load_settings(), "while starting {}", "the service")
}

#[test]
fn chain_records_every_hop() {
    let error = start_service();

    assert!(error.text().starts_with('\n'));
    assert_trace!(
        error,
        [
            "open_file() -> cannot open settings.toml",
            "load_settings()",
            "start_service() -> while starting the service",
        ]
    );
}

#[test]
fn record_names_this_file() {
    let error = open_file("a");
    assert!(error.text().contains("tests/error.rs:open_file():"), "{error}");
}

#[test]
fn empty_message_still_has_trace() {
    let error = new_error!("");
    assert!(!error.text().is_empty());
    assert_trace!(error, ["empty_message_still_has_trace() -> "]);
}

#[test]
fn text_only_grows() {
    let first = new_error!("m");
    let second = trace!(first.clone());
    let third = annotate!(second.clone(), "note");

    assert!(second.text().starts_with(first.text()));
    assert!(third.text().starts_with(second.text()));
    assert!(first.text().len() < second.text().len());
    assert!(second.text().len() < third.text().len());
}

#[test]
fn concat_keeps_order() {
    let error = concat_errors!(new_error!("A"), new_error!("B"));
    let text = error.text();

    let a = text.find("-> A").unwrap();
    let b = text.find("-> B").unwrap();
    assert!(a < b);
    assert_trace!(error, ["concat_keeps_order() -> A", "concat_keeps_order() -> B", "concat_keeps_order()"]);
}

#[test]
fn clones_are_independent() {
    let original = new_error!("disk full");
    let mut copy = original.clone();
    copy.text_mut().push_str(" and more");

    assert!(original.text().ends_with("-> disk full"));
    assert!(copy.text().ends_with("-> disk full and more"));
}

#[test]
fn closures_report_enclosing_function() {
    let make = || new_error!("from closure");
    assert_trace!(make(), ["closures_report_enclosing_function() -> from closure"]);
}

#[test]
fn plain_error_has_no_trace() {
    let error = Error::new("plain");
    assert_eq!(error.text(), "plain");
    assert_trace!(error, []);
}

fn parse_count(text: &str) -> Result<u32> {
    match text.parse() {
        Ok(count) => Ok(count),
        Err(e) => bail!("invalid count {text:?}: {e}"),
    }
}

fn total(items: &[&str]) -> Result<u32> {
    let mut sum = 0;
    for item in items {
        sum += trace!(parse_count(item))?;
    }
    Ok(sum)
}

#[test]
fn question_mark_propagation() {
    assert_eq!(total(&["1", "2"]), Ok(3));

    let error = total(&["1", "x"]).unwrap_err();
    assert_trace!(error, ["parse_count() -> invalid count \"x\": invalid digit found in string", "total()"]);
}

#[test]
fn std_error_interop() {
    fn boxed() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(new_error!("boxed").into())
    }

    let error = boxed().unwrap_err();
    assert!(error.to_string().ends_with("-> boxed"));
}
