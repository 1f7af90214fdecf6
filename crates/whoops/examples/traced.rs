// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates `#[traced]` on sync and async functions.

use futures::executor::block_on;
use whoops::{Result, new_error, traced};

#[traced("reading {path}")]
fn read(path: &str) -> Result<String> {
    Err(new_error!("file not found"))
}

#[traced("loading profile {}", user.to_uppercase())]
async fn load_profile(user: &str) -> Result<String> {
    std::future::ready(()).await;
    read(&format!("/home/{user}/.profile"))
}

fn main() {
    let error = block_on(load_profile("alice")).unwrap_err();
    println!("{error}");
}
