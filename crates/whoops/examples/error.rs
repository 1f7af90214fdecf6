// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates starting a trace chain and extending it.

use whoops::{annotate, new_error, trace};

fn main() {
    // The place where an error starts must describe what went wrong.
    let error = new_error!("This is an example error. The trace begins here.");

    // Plain trace records are optional.
    let error = trace!(error);

    let error = annotate!(error, "Trace records can carry a note like this.");

    println!("{error}");
}
