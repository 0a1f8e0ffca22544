//! Error types for the outcome library.
//!
//! These are contract violations, not domain failures. Domain failures
//! live in [`Outcome::Failure`](crate::Outcome::Failure) and never reach
//! this type unless the caller converts them explicitly.

use crate::errors::Errors;

/// The message carried by [`Error::InvalidState`] when a value is
/// requested from a failure without a fallback.
pub const NO_VALUE_MESSAGE: &str = "Failure does not have a value";

/// Errors raised when an [`Outcome`](crate::Outcome) is used in a way its
/// current variant cannot satisfy.
///
/// Marked `#[non_exhaustive]` to allow adding variants without breaking
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A value was requested from a failure and no fallback was supplied.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// What was attempted
        message: String,
    },

    /// Failure messages surfaced as an error, e.g. through `?`.
    ///
    /// The messages are part of the display text, not a `source()`, so
    /// error reports print them once.
    #[error("Failed: {0}")]
    Failed(Errors),
}

impl From<Errors> for Error {
    fn from(errors: Errors) -> Self {
        Error::Failed(errors)
    }
}

/// Convenience `Result` type alias for outcome operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid-state error.
    pub fn invalid_state<S: Into<String>>(message: S) -> Self {
        Error::InvalidState {
            message: message.into(),
        }
    }

    /// Creates the invalid-state error for a value requested from a failure.
    pub fn no_value() -> Self {
        Self::invalid_state(NO_VALUE_MESSAGE)
    }

    /// Returns the failure messages if this error wraps them.
    pub fn errors(&self) -> Option<&Errors> {
        match self {
            Error::Failed(errors) => Some(errors),
            Error::InvalidState { .. } => None,
        }
    }
}
