// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Explicit error propagation with human-readable call-site traces.
//!
//! Whoops carries failures as plain values. An [`Error`] is a single piece of text that grows a
//! new line for every function the failure passes through, so printing it shows where the
//! failure started and the path it took back to the caller.
//!
//! # Key Features
//!
//! - [**`Error`**](Error): Owned, clonable error text with trace records appended at each hop
//! - [**`Outcome`**](Outcome): Success or an [`Error`], for operations without a payload
//! - [**`Optional<T>`**](Optional): A value of type `T` or the [`Error`] explaining why there is none
//! - [**`new_error!`**](new_error), [**`trace!`**](trace), [**`annotate!`**](annotate),
//!   [**`concat_errors!`**](concat_errors) and [**`bail!`**](bail): Macros that capture the
//!   file, function and line of the call site
//! - [**`#[traced]`**](traced): Attribute macro that traces every error leaving a function
//! - [**`TraceableExt`**](TraceableExt): Trait that provides the tracing methods for every
//!   error carrier, including `Result<T, Error>`
//!
//! # Quick Start
//!
//! ```rust
//! use whoops::{Optional, Outcome, new_error, trace};
//!
//! fn read_config(path: &str) -> Optional<String> {
//!     if path.is_empty() {
//!         return Optional::of_error(new_error!("empty config path"));
//!     }
//!     Optional::of(format!("contents of {path}"))
//! }
//!
//! fn start(path: &str) -> Outcome {
//!     let config = read_config(path);
//!     if config.has_error() {
//!         return trace!(Outcome::failure(config.error()));
//!     }
//!     Outcome::success()
//! }
//!
//! assert!(start("app.toml").is_success());
//!
//! let outcome = start("");
//! assert!(outcome.is_failure());
//! println!("{outcome}");
//! ```
//!
//! # Trace Format
//!
//! Every trace record is one line appended to the error text:
//!
//! ```text
//! <file>:<function>():<line>
//! <file>:<function>():<line> -> <note>
//! ```
//!
//! [`new_error!`](new_error) starts a chain from empty text, so the text of a fresh error is
//! `"\n<file>:<function>():<line> -> <message>"`. The text is append-only: a later record never
//! changes an earlier one.
//!
//! ```text
//!
//! src/config.rs:read_config():12 -> empty config path
//! src/main.rs:start():20
//! src/main.rs:main():31 -> while starting the service
//! ```
//!
//! # Sentinels
//!
//! Asking a successful carrier for its error returns a placeholder instead of failing:
//! [`Outcome::error`] returns [`SUCCESS_MESSAGE`] and [`Optional::error`] returns
//! [`HAS_VALUE_MESSAGE`]. These placeholders look like any other error, so check
//! [`Outcome::is_failure`] or [`Optional::has_error`] to tell the states apart.
//!
//! # Bad Access
//!
//! Reading the value of an [`Optional`] that holds an error panics with the stored error text,
//! followed by the access site and [`BAD_ACCESS_MESSAGE`]. The `try_` accessors return the same
//! text as an [`AccessError`] instead.
//!
//! # Traced Functions
//!
//! ```rust
//! use whoops::{Outcome, new_error};
//!
//! #[whoops::traced("saving {name}")]
//! fn save(name: &str) -> Outcome {
//!     Outcome::failure(new_error!("disk full"))
//! }
//!
//! let text = save("settings").error().into_text();
//! assert!(text.contains(":save():"));
//! assert!(text.ends_with(" -> saving settings"));
//! ```
//!
//! # Features
//!
//! - `logs` (default): Emits [`tracing`](https://docs.rs/tracing) events. A bad access logs at
//!   `ERROR` before panicking and releasing a value from an [`Optional`] logs at `DEBUG`.
//! - `test-util`: Enables the `test_util` module and the `assert_notes!` macro.

#![doc(html_logo_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/whoops/logo.png")]
#![doc(html_favicon_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/whoops/favicon.ico")]

#[doc(hidden)]
extern crate self as whoops;

mod access_error;
mod error;
mod macros;
mod optional;
mod outcome;
mod site;
mod traceable;

#[cfg(any(feature = "test-util", test))]
pub mod test_util;

pub use access_error::{AccessError, BAD_ACCESS_MESSAGE};
pub use error::Error;
pub use optional::{HAS_VALUE_MESSAGE, Optional, RELEASED_MESSAGE};
pub use outcome::{Outcome, SUCCESS_MESSAGE};
pub use site::Site;
pub use traceable::{FromError, Traceable, TraceableExt};
pub use whoops_macros::traced;

/// A [`Result`](std::result::Result) whose error defaults to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[doc(hidden)]
pub mod __private {
    pub use crate::site::function_name;
}
