//! Combinators whose continuation is asynchronous while the outcome is not.
//!
//! Each method inspects the outcome first and only creates (and awaits) the
//! continuation's future on the track that needs it, so a failure never
//! starts the continuation.

use core::future::Future;

use crate::outcome::Outcome;
use crate::types::error::Error;

impl<T> Outcome<T> {
    /// Transforms the success value with an async function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rop_rail::Outcome;
    ///
    /// async fn example() {
    ///     let doubled = Outcome::success(21).map_async(|x| async move { x * 2 }).await;
    ///     assert_eq!(doubled, Outcome::Success(42));
    /// }
    /// ```
    pub async fn map_async<K, F, Fut>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = K>,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains an async fallible continuation.
    pub async fn bind_async<K, F, Fut>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<K>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias of [`bind_async`](Self::bind_async).
    #[inline]
    pub async fn validate_async<K, F, Fut>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<K>>,
    {
        self.bind_async(f).await
    }

    /// Turns a success into a failure with `error` when the async predicate is false.
    pub async fn ensure_async<P, Fut, E>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
        E: Into<Error>,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value).await {
                    Self::Success(value)
                } else {
                    Self::Failure(error.into())
                }
            },
            failure => failure,
        }
    }

    /// Runs an async side effect on the success value.
    pub async fn tap_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Success(value) = &self {
            f(value).await;
        }
        self
    }

    /// Attempts to replace any failure with the outcome of an async recovery.
    pub async fn compensate_async<F, Fut>(self, recovery: F) -> Self
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => recovery(error).await,
        }
    }

    /// Attempts async recovery only for failures matching `predicate`.
    pub async fn compensate_when_async<P, F, Fut>(self, predicate: P, recovery: F) -> Self
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        match self {
            Self::Failure(error) => {
                if predicate(&error) {
                    recovery(error).await
                } else {
                    Self::Failure(error)
                }
            },
            success => success,
        }
    }

    /// Alias of [`compensate_when_async`](Self::compensate_when_async).
    #[inline]
    pub async fn recover_on_failure_async<P, F, Fut>(self, predicate: P, recovery: F) -> Self
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        self.compensate_when_async(predicate, recovery).await
    }

    /// Folds both tracks into a single value with async handlers.
    pub async fn match_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_failure(error).await,
        }
    }

    /// Alias of [`match_async`](Self::match_async).
    #[inline]
    pub async fn finally_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        self.match_async(on_success, on_failure).await
    }
}
