//! Extension trait for `Future<Output = Outcome<T>>`.
//!
//! Provides the railway combinators for an outcome that has not resolved
//! yet, mirroring the inherent methods of [`Outcome`]. Plain names take a
//! synchronous continuation; `*_async` names take one returning a future.

use core::future::Future;

use crate::outcome::Outcome;
use crate::types::error::Error;

use super::map_future::{MapFuture, TapFuture};

/// Railway combinators for futures that resolve to an [`Outcome`].
///
/// Every combinator awaits the antecedent before looking at its track, and
/// a failed antecedent skips the continuation exactly like the synchronous
/// version. The outcome produced is identical to calling the synchronous
/// combinator on the awaited outcome.
///
/// # Examples
///
/// ## Synchronous continuation
///
/// ```rust
/// use rop_rail::prelude_async::*;
///
/// async fn load_quantity() -> Outcome<u32> {
///     Outcome::success(3)
/// }
///
/// async fn example() {
///     let total = load_quantity()
///         .ensure(|qty| *qty > 0, Error::validation("Quantity is required", "qty"))
///         .map(|qty| qty * 10)
///         .await;
///     assert_eq!(total, Outcome::Success(30));
/// }
/// ```
///
/// ## Asynchronous continuation
///
/// ```rust
/// use rop_rail::prelude_async::*;
///
/// async fn find_user(id: u64) -> Outcome<String> {
///     Outcome::from_option((id == 1).then(|| "ada".to_string()), Error::not_found("no user"))
/// }
///
/// async fn example() {
///     let greeting = std::future::ready(Outcome::success(1))
///         .bind_async(find_user)
///         .map(|name| format!("hello {name}"))
///         .await;
///     assert_eq!(greeting, Outcome::Success("hello ada".to_string()));
/// }
/// ```
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Transforms the success value once the antecedent resolved.
    fn map<K, F>(self, f: F) -> MapFuture<Self, F>
    where
        F: FnOnce(T) -> K,
    {
        MapFuture::new(self, f)
    }

    /// Chains a fallible continuation.
    fn bind<K, F>(self, f: F) -> impl Future<Output = Outcome<K>>
    where
        F: FnOnce(T) -> Outcome<K>,
    {
        async move { self.await.bind(f) }
    }

    /// Alias of [`bind`](Self::bind).
    fn validate<K, F>(self, f: F) -> impl Future<Output = Outcome<K>>
    where
        F: FnOnce(T) -> Outcome<K>,
    {
        self.bind(f)
    }

    /// Turns a success into a failure with `error` when `predicate` is false.
    fn ensure<P, E>(self, predicate: P, error: E) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        E: Into<Error>,
    {
        async move { self.await.ensure(predicate, error) }
    }

    /// Like [`ensure`](Self::ensure), building the error from the rejected value.
    fn ensure_with<P, E>(self, predicate: P, error: E) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        E: FnOnce(&T) -> Error,
    {
        async move { self.await.ensure_with(predicate, error) }
    }

    /// Keeps the value when `check` succeeds, adopting its error otherwise.
    fn ensure_outcome<K, C>(self, check: C) -> impl Future<Output = Outcome<T>>
    where
        C: FnOnce(&T) -> Outcome<K>,
    {
        async move { self.await.ensure_outcome(check) }
    }

    /// Runs a side effect on the success value.
    fn tap<F>(self, f: F) -> TapFuture<Self, F>
    where
        F: FnOnce(&T),
    {
        TapFuture::new(self, f)
    }

    /// Runs a side effect on the error.
    fn tap_error<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error),
    {
        async move { self.await.tap_error(f) }
    }

    /// Transforms the error.
    fn map_error<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Error,
    {
        async move { self.await.map_error(f) }
    }

    /// Attempts to replace any failure with the outcome of `recovery`.
    fn compensate<F>(self, recovery: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        async move { self.await.compensate(recovery) }
    }

    /// Attempts recovery only for failures matching `predicate`.
    fn compensate_when<P, F>(self, predicate: P, recovery: F) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> Outcome<T>,
    {
        async move { self.await.compensate_when(predicate, recovery) }
    }

    /// Alias of [`compensate_when`](Self::compensate_when).
    fn recover_on_failure<P, F>(self, predicate: P, recovery: F) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> Outcome<T>,
    {
        self.compensate_when(predicate, recovery)
    }

    /// Folds both tracks into a single value.
    fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        async move { self.await.match_with(on_success, on_failure) }
    }

    /// Alias of [`match_with`](Self::match_with).
    fn finally<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        self.match_with(on_success, on_failure)
    }

    /// Pairs with another pending outcome, collecting both errors.
    ///
    /// `self` is awaited to completion before `other` is polled.
    fn combine<U, Other>(self, other: Other) -> impl Future<Output = Outcome<(T, U)>>
    where
        Other: Future<Output = Outcome<U>>,
    {
        async move {
            let left = self.await;
            let right = other.await;
            left.combine(right)
        }
    }

    /// Transforms the success value with an async function.
    fn map_async<K, F, Fut>(self, f: F) -> impl Future<Output = Outcome<K>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = K>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Chains an async fallible continuation.
    fn bind_async<K, F, Fut>(self, f: F) -> impl Future<Output = Outcome<K>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<K>>,
    {
        async move { self.await.bind_async(f).await }
    }

    /// Alias of [`bind_async`](Self::bind_async).
    fn validate_async<K, F, Fut>(self, f: F) -> impl Future<Output = Outcome<K>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<K>>,
    {
        self.bind_async(f)
    }

    /// Turns a success into a failure with `error` when the async predicate is false.
    fn ensure_async<P, Fut, E>(self, predicate: P, error: E) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
        E: Into<Error>,
    {
        async move { self.await.ensure_async(predicate, error).await }
    }

    /// Runs an async side effect on the success value.
    fn tap_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.tap_async(f).await }
    }

    /// Attempts to replace any failure with the outcome of an async recovery.
    fn compensate_async<F, Fut>(self, recovery: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.compensate_async(recovery).await }
    }

    /// Attempts async recovery only for failures matching `predicate`.
    fn compensate_when_async<P, F, Fut>(
        self,
        predicate: P,
        recovery: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move { self.await.compensate_when_async(predicate, recovery).await }
    }

    /// Alias of [`compensate_when_async`](Self::compensate_when_async).
    fn recover_on_failure_async<P, F, Fut>(
        self,
        predicate: P,
        recovery: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        self.compensate_when_async(predicate, recovery)
    }

    /// Folds both tracks into a single value with async handlers.
    fn match_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        async move { self.await.match_async(on_success, on_failure).await }
    }

    /// Alias of [`match_async`](Self::match_async).
    fn finally_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        self.match_async(on_success, on_failure)
    }
}

impl<Fut, T> FutureOutcomeExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}
