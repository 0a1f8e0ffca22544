#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Outcome Library
//!
//! A value-or-errors result type for composing failures without panics,
//! with synchronous and asynchronous combinators.

pub mod error;
pub mod errors;
pub mod future;
pub mod outcome;

mod proptests;

// Re-exports for convenience
pub use error::{Error, Result};
pub use errors::Errors;
pub use outcome::{failure, success, Outcome};
