//! Synchronous railway combinators.
//!
//! Every combinator here follows the same rule: a failed outcome passes its
//! error through untouched and the continuation is never invoked.

use crate::outcome::core::Outcome;
use crate::types::error::Error;

impl<T> Outcome<T> {
    /// Transforms the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).map(|x| x * 2), Outcome::Success(10));
    /// ```
    #[inline]
    pub fn map<K, F>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> K,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a fallible continuation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, Outcome};
    ///
    /// fn half(x: i32) -> Outcome<i32> {
    ///     Outcome::success_if(x % 2 == 0, x / 2, Error::domain("odd"))
    /// }
    ///
    /// assert_eq!(Outcome::success(8).bind(half).bind(half), Outcome::Success(2));
    /// assert!(Outcome::success(6).bind(half).bind(half).is_failure());
    /// ```
    #[inline]
    pub fn bind<K, F>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> Outcome<K>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias of [`bind`](Self::bind), reads better for validation steps.
    #[inline]
    pub fn validate<K, F>(self, f: F) -> Outcome<K>
    where
        F: FnOnce(T) -> Outcome<K>,
    {
        self.bind(f)
    }

    /// Turns a success into a failure with `error` when `predicate` is false.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, Outcome};
    ///
    /// let err = Error::validation("must be positive", "x");
    /// assert_eq!(Outcome::success(10).ensure(|x| *x > 0, err.clone()), Outcome::Success(10));
    /// assert_eq!(Outcome::success(-1).ensure(|x| *x > 0, err.clone()), Outcome::Failure(err));
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: impl Into<Error>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error.into())
                }
            },
            failure => failure,
        }
    }

    /// Like [`ensure`](Self::ensure), building the error from the rejected value.
    #[inline]
    pub fn ensure_with<P, E>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: FnOnce(&T) -> Error,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error(&value))
                }
            },
            failure => failure,
        }
    }

    /// Keeps the value when `check` succeeds, adopting its error otherwise.
    #[inline]
    pub fn ensure_outcome<K, C>(self, check: C) -> Self
    where
        C: FnOnce(&T) -> Outcome<K>,
    {
        match self {
            Self::Success(value) => match check(&value) {
                Outcome::Success(_) => Self::Success(value),
                Outcome::Failure(error) => Self::Failure(error),
            },
            failure => failure,
        }
    }

    /// Runs a side effect on the success value and returns the outcome unchanged.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Runs a side effect on the error and returns the outcome unchanged.
    #[inline]
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Transforms the error, leaving successes untouched.
    #[inline]
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(f(error)),
        }
    }

    /// Leaves the railway, folding both tracks into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, Outcome};
    ///
    /// let status = Outcome::<u32>::failure(Error::not_found("gone"))
    ///     .match_with(|_| 200, |err| if err.is_not_found() { 404 } else { 500 });
    /// assert_eq!(status, 404);
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Alias of [`match_with`](Self::match_with).
    #[inline]
    pub fn finally<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        self.match_with(on_success, on_failure)
    }

    /// Attempts to replace any failure with the outcome of `recovery`.
    #[inline]
    pub fn compensate<F>(self, recovery: F) -> Self
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    /// Attempts recovery only for failures matching `predicate`.
    ///
    /// Successes and non-matching failures pass through and `recovery` is not
    /// called.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, Outcome};
    ///
    /// let recovered = Outcome::<u32>::failure(Error::service_unavailable("db down"))
    ///     .compensate_when(Error::is_service_unavailable, |_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    ///
    /// let untouched = Outcome::<u32>::failure(Error::forbidden("no"))
    ///     .compensate_when(Error::is_service_unavailable, |_| Outcome::success(0));
    /// assert!(untouched.error().is_forbidden());
    /// ```
    #[inline]
    pub fn compensate_when<P, F>(self, predicate: P, recovery: F) -> Self
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> Outcome<T>,
    {
        match self {
            Self::Failure(error) => {
                if predicate(&error) {
                    recovery(error)
                } else {
                    Self::Failure(error)
                }
            },
            success => success,
        }
    }

    /// Alias of [`compensate_when`](Self::compensate_when).
    #[inline]
    pub fn recover_on_failure<P, F>(self, predicate: P, recovery: F) -> Self
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> Outcome<T>,
    {
        self.compensate_when(predicate, recovery)
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T> {
        self.bind(|inner| inner)
    }
}
