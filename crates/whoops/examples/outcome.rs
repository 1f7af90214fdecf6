// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates returning success or failure without a payload.

use whoops::{Outcome, new_error};

fn operation(succeed: bool) -> Outcome {
    if succeed {
        return Outcome::success();
    }

    Outcome::failure(new_error!("Operation failed!"))
}

fn main() {
    for succeed in [true, false] {
        let outcome = operation(succeed);
        if outcome.is_failure() {
            println!("{}", outcome.error());
        }
    }
}
