//! Extension traits for lifting standard types onto the railway.
//!
//! # Examples
//!
//! ```
//! use rop_rail::traits::{OptionOutcomeExt, ResultOutcomeExt};
//! use rop_rail::{Error, Outcome};
//!
//! let parsed = "12".parse::<i32>().outcome_with(|e| Error::bad_request(e.to_string()));
//! assert_eq!(parsed, Outcome::Success(12));
//!
//! let user: Option<&str> = None;
//! assert!(user.ok_or_outcome(Error::not_found("no such user")).is_failure());
//! ```

use crate::outcome::Outcome;
use crate::types::error::Error;

/// Extension trait turning a `Result` into an [`Outcome`].
pub trait ResultOutcomeExt<T, E> {
    /// Converts into an outcome, mapping the error with `Into<Error>`.
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<Error>;

    /// Converts into an outcome, building the error from the original one.
    ///
    /// The closure only runs on the error path.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::traits::ResultOutcomeExt;
    /// use rop_rail::Error;
    ///
    /// let outcome = "x".parse::<u8>().outcome_with(|e| Error::validation(e.to_string(), "age"));
    /// assert!(outcome.error().is_validation());
    /// ```
    fn outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error;
}

impl<T, E> ResultOutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<Error>,
    {
        Outcome::from_result(self)
    }

    #[inline]
    fn outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(f(error)),
        }
    }
}

/// Extension trait turning an `Option` into an [`Outcome`].
pub trait OptionOutcomeExt<T> {
    /// Succeeds with the contained value or fails with `error`.
    fn ok_or_outcome(self, error: impl Into<Error>) -> Outcome<T>;

    /// Succeeds with the contained value or fails with the error built by `f`.
    fn ok_or_outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Error;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    #[inline]
    fn ok_or_outcome(self, error: impl Into<Error>) -> Outcome<T> {
        Outcome::from_option(self, error)
    }

    #[inline]
    fn ok_or_outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Error,
    {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(f()),
        }
    }
}
