// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates returning a value or the error explaining why there is none.

use whoops::{Optional, bail, trace};

const LIMIT: usize = 100_000;

fn multiply(lhs: usize, rhs: usize) -> Optional<usize> {
    if lhs == rhs {
        bail!("lhs and rhs cannot be the same value");
    }

    Optional::of(lhs * rhs)
}

fn products(count: usize) -> Optional<Vec<usize>> {
    if count == 0 {
        bail!("count cannot be zero");
    }

    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let product = multiply(LIMIT - count, count);
        if product.has_error() {
            return trace!(Optional::of_error(product.error()));
        }

        values.push(product.into_value());
    }

    Optional::of(values)
}

fn main() {
    // The first call succeeds, the other two fail.
    for count in [5, 0, LIMIT / 2] {
        let result = products(count);
        if result.has_error() {
            println!("{}", result.error());
        } else {
            println!("{} products", result.value().len());
        }
    }
}
