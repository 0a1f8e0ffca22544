//! Asynchronous combinators.
//!
//! These mirror [`Outcome::fold`], [`Outcome::select`],
//! [`Outcome::select_or_else`] and [`Outcome::inspect`] for callbacks that
//! return futures. Each is an `async fn`: the callback for the current
//! variant is called once and its future is awaited in place. Nothing is
//! spawned, so the combinators run on whatever executor polls them, and
//! dropping the returned future drops the callback's future with it.

use std::future::Future;

use crate::errors::Errors;
use crate::outcome::Outcome;

impl<T> Outcome<T> {
    /// Asynchronous [`fold`](Outcome::fold).
    pub async fn fold_async<U, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        F: FnOnce(Errors) -> FFut,
        FFut: Future<Output = U>,
    {
        match self {
            Outcome::Success(value) => on_success(value).await,
            Outcome::Failure(errors) => on_failure(errors).await,
        }
    }

    /// Asynchronous [`select`](Outcome::select).
    ///
    /// Resolves once `on_success`'s future resolves, yielding its outcome.
    /// A failure resolves immediately with its messages untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let result = futures::executor::block_on(
    ///     Outcome::success(5).select_async(|value| async move { Outcome::success(value + 1) }),
    /// );
    /// assert_eq!(result, Outcome::success(6));
    /// ```
    pub async fn select_async<U, S, SFut>(self, on_success: S) -> Outcome<U>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = Outcome<U>>,
    {
        match self {
            Outcome::Success(value) => on_success(value).await,
            Outcome::Failure(errors) => {
                tracing::trace!(errors = errors.len(), "propagating failure");
                Outcome::Failure(errors)
            }
        }
    }

    /// Asynchronous [`select_or_else`](Outcome::select_or_else).
    pub async fn select_or_else_async<U, S, SFut, F, FFut>(
        self,
        on_success: S,
        on_failure: F,
    ) -> Outcome<U>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = Outcome<U>>,
        F: FnOnce(Errors) -> FFut,
        FFut: Future<Output = Outcome<U>>,
    {
        match self {
            Outcome::Success(value) => on_success(value).await,
            Outcome::Failure(errors) => {
                tracing::trace!(errors = errors.len(), "handing failure to recovery");
                on_failure(errors).await
            }
        }
    }

    /// Asynchronous [`inspect`](Outcome::inspect).
    pub async fn inspect_async<'a, S, SFut, F, FFut>(&'a self, on_success: S, on_failure: F)
    where
        S: FnOnce(&'a T) -> SFut,
        SFut: Future<Output = ()>,
        F: FnOnce(&'a Errors) -> FFut,
        FFut: Future<Output = ()>,
    {
        match self {
            Outcome::Success(value) => on_success(value).await,
            Outcome::Failure(errors) => on_failure(errors).await,
        }
    }
}
