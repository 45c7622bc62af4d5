//! Conversion helpers between standard types and the railway.
//!
//! These adapters make it straightforward to adopt `rop-rail` incrementally:
//! wrap results coming from existing code, or hand outcomes back to APIs that
//! expect `Result`.
//!
//! # Examples
//!
//! ```
//! use rop_rail::convert::*;
//! use rop_rail::{Error, Outcome};
//!
//! let outcome = result_to_outcome(Ok::<_, Error>(42));
//! assert!(outcome.is_success());
//!
//! let result = outcome_to_result(Outcome::<i32>::failure(Error::conflict("taken")));
//! assert!(result.is_err());
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::outcome::Outcome;
use crate::types::error::Error;
use crate::types::validation_error::ValidationError;

/// Converts a `Result` whose error converts into [`Error`] into an [`Outcome`].
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Into<Error>,
{
    Outcome::from_result(result)
}

/// Converts an [`Outcome`] into a standard `Result`.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Error> {
    outcome.into_result()
}

/// Collects results, combining the errors of every failed item.
///
/// # Examples
///
/// ```
/// use rop_rail::convert::collect_results;
/// use rop_rail::Error;
///
/// let results = vec![Ok(1), Err(Error::not_found("a")), Err(Error::not_found("b"))];
/// let outcome = collect_results(results);
/// assert_eq!(outcome.error().as_aggregate().unwrap().len(), 2);
/// ```
pub fn collect_results<T, E, I>(results: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Into<Error>,
{
    results.into_iter().map(Outcome::from_result).collect()
}

/// Builds a validation error from `(field, message)` pairs.
///
/// Returns `None` when there are no pairs, i.e. nothing failed. The first
/// message becomes the error detail.
///
/// # Examples
///
/// ```
/// use rop_rail::convert::validation_from_pairs;
///
/// let err = validation_from_pairs([("email", "Required"), ("email", "Invalid"), ("name", "Required")])
///     .unwrap();
/// assert_eq!(err.field_errors().len(), 2);
/// assert_eq!(err.detail(), "Required");
///
/// assert!(validation_from_pairs(Vec::<(&str, &str)>::new()).is_none());
/// ```
pub fn validation_from_pairs<I, F, M>(pairs: I) -> Option<ValidationError>
where
    I: IntoIterator<Item = (F, M)>,
    F: Into<String>,
    M: Into<String>,
{
    pairs.into_iter().fold(None, |error: Option<ValidationError>, (field, message)| match error {
        Some(error) => Some(error.and(field, message)),
        None => Some(ValidationError::new(message, field)),
    })
}
