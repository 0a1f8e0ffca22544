//! The success-or-errors outcome type and its synchronous combinators.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, NO_VALUE_MESSAGE};
use crate::errors::Errors;

/// The outcome of an operation: a value, or one or more error messages.
///
/// Outcomes are immutable. Every combinator consumes or borrows the
/// outcome and produces a new one; nothing is rewritten in place.
///
/// An outcome that is built and then ignored is a lint warning, so a
/// failure cannot be dropped by accident:
///
/// ```compile_fail
/// #![deny(unused_must_use)]
/// outcome::failure::<i32, _, _>(["ignored"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),

    /// The operation failed with the given messages, in order.
    Failure(Errors),
}

/// Creates a successful outcome holding `value`.
///
/// # Examples
///
/// ```
/// let result = outcome::success(5);
/// assert_eq!(result.value_or_default(10), 5);
/// ```
pub fn success<T>(value: T) -> Outcome<T> {
    Outcome::Success(value)
}

/// Creates a failed outcome from messages, kept verbatim and in order.
///
/// # Examples
///
/// ```
/// let result = outcome::failure::<i32, _, _>(["error1", "error2"]);
/// assert_eq!(result.errors_or_empty().as_slice(), ["error1", "error2"]);
/// ```
pub fn failure<T, I, S>(errors: I) -> Outcome<T>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Outcome::Failure(errors.into_iter().collect())
}

impl<T> Outcome<T> {
    /// Creates a successful outcome. Same as [`success`].
    pub fn success(value: T) -> Self {
        success(value)
    }

    /// Creates a failed outcome. Same as [`failure`].
    pub fn failure<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        failure(errors)
    }

    /// Creates a failed outcome from an existing message sequence.
    pub fn from_errors(errors: Errors) -> Self {
        Outcome::Failure(errors)
    }

    /// Converts a standard result, keeping the error's display text as the
    /// single failure message.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(Errors::from([err.to_string()])),
        }
    }

    /// Returns `true` if the outcome is `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrows the success value, if any.
    pub fn success_value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrows the failure messages, if any.
    pub fn errors(&self) -> Option<&Errors> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(errors) => Some(errors),
        }
    }

    /// Folds the outcome into a plain value.
    ///
    /// Exactly one of the callbacks runs: `on_success` with the value, or
    /// `on_failure` with the messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let result: Outcome<i32> = Outcome::failure(["error"]);
    /// let text = result.fold(|value| value.to_string(), |errors| errors.to_string());
    /// assert_eq!(text, "error");
    /// ```
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(Errors) -> U,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(errors) => on_failure(errors),
        }
    }

    /// Returns the value, or [`Error::InvalidState`] for a failure.
    pub fn value_or_err(self) -> Result<T, Error> {
        self.fold(Ok, |errors| {
            tracing::debug!(errors = %errors, "value requested from failure");
            Err(Error::no_value())
        })
    }

    /// Returns the value, or the error built by `factory` for a failure.
    ///
    /// `factory` is called at most once, and never for a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let result: Outcome<i32> = Outcome::failure(["error"]);
    /// let err = result.value_or_else_err(|| "not supported").unwrap_err();
    /// assert_eq!(err, "not supported");
    /// ```
    pub fn value_or_else_err<E, F>(self, factory: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.fold(Ok, |_| Err(factory()))
    }

    /// Returns the value, or `default` for a failure.
    pub fn value_or_default(self, default: T) -> T {
        self.fold(|value| value, |_| default)
    }

    /// Returns the failure messages, or an empty sequence for a success.
    pub fn errors_or_empty(&self) -> Errors {
        self.errors().cloned().unwrap_or_default()
    }

    /// Extracts the value, panicking on a failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Failure`, with the failure messages in the
    /// panic payload.
    #[allow(clippy::panic)]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(errors) => panic!("{NO_VALUE_MESSAGE}: {errors}"),
        }
    }

    /// Chains a success into a computation that may itself fail.
    ///
    /// A failure is passed through with its messages untouched and
    /// `on_success` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let result = Outcome::success(5).select(|value| Outcome::success(value.to_string()));
    /// assert_eq!(result, Outcome::success("5".to_string()));
    /// ```
    pub fn select<U, S>(self, on_success: S) -> Outcome<U>
    where
        S: FnOnce(T) -> Outcome<U>,
    {
        self.fold(on_success, |errors| {
            tracing::trace!(errors = errors.len(), "propagating failure");
            Outcome::Failure(errors)
        })
    }

    /// Like [`select`](Self::select), but hands a failure to `on_failure`.
    ///
    /// `on_failure` may recover into a success or re-wrap the messages,
    /// for example after appending to them.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let result: Outcome<i32> = Outcome::failure(["error"]);
    /// let result = result.select_or_else(Outcome::success, |errors| {
    ///     Outcome::from_errors(errors.with("new error"))
    /// });
    /// assert_eq!(result.errors_or_empty().as_slice(), ["error", "new error"]);
    /// ```
    pub fn select_or_else<U, S, F>(self, on_success: S, on_failure: F) -> Outcome<U>
    where
        S: FnOnce(T) -> Outcome<U>,
        F: FnOnce(Errors) -> Outcome<U>,
    {
        self.fold(on_success, |errors| {
            tracing::trace!(errors = errors.len(), "handing failure to recovery");
            on_failure(errors)
        })
    }

    /// Transforms the success value with an infallible function.
    pub fn map<U, S>(self, on_success: S) -> Outcome<U>
    where
        S: FnOnce(T) -> U,
    {
        self.select(|value| Outcome::Success(on_success(value)))
    }

    /// Runs exactly one side-effecting callback for the current variant.
    pub fn inspect<S, F>(&self, on_success: S, on_failure: F)
    where
        S: FnOnce(&T),
        F: FnOnce(&Errors),
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(errors) => on_failure(errors),
        }
    }

    /// Converts into a standard result with the messages as the error.
    pub fn into_result(self) -> Result<T, Errors> {
        self.fold(Ok, Err)
    }
}

impl<T> From<Errors> for Outcome<T> {
    fn from(errors: Errors) -> Self {
        Outcome::Failure(errors)
    }
}

impl<T> From<Result<T, Errors>> for Outcome<T> {
    fn from(result: Result<T, Errors>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(errors) => Outcome::Failure(errors),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Errors> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
