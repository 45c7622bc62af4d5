use crate::types::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a fallible computation on the railway.
///
/// `Outcome<T>` is either on the success track, holding a `T`, or on the
/// failure track, holding a structured [`Error`]. Exactly one of the two holds
/// and the value never changes after construction; every combinator consumes
/// the outcome and returns a new one.
///
/// # Variants
///
/// * `Success(T)` - the computation produced a value
/// * `Failure(Error)` - the computation failed
///
/// # Examples
///
/// ```
/// use rop_rail::{Error, Outcome};
///
/// let ok = Outcome::success(5).map(|x| x * 2);
/// assert_eq!(ok, Outcome::Success(10));
///
/// let missing: Outcome<i32> = Outcome::failure(Error::not_found("missing"));
/// assert!(missing.map(|x| x * 2).is_failure());
/// ```
#[must_use = "this `Outcome` may be a failure, which should be handled"]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome<T> {
    Success(T),
    Failure(Error),
}

const VALUE_OF_FAILURE: &str = "attempted to access the value of a failed outcome";
const ERROR_OF_SUCCESS: &str = "attempted to access the error of a successful outcome";

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// Accepts any concrete error kind, e.g. a [`ValidationError`](crate::ValidationError).
    #[inline]
    pub fn failure(error: impl Into<Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Succeeds with `value` when `condition` holds, fails with `error` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, Outcome};
    ///
    /// let age = 17;
    /// let adult = Outcome::success_if(age >= 18, age, Error::validation("Too young", "age"));
    /// assert!(adult.is_failure());
    /// ```
    #[inline]
    pub fn success_if(condition: bool, value: T, error: impl Into<Error>) -> Self {
        if condition {
            Self::Success(value)
        } else {
            Self::Failure(error.into())
        }
    }

    /// Fails with `error` when `condition` holds, succeeds with `value` otherwise.
    #[inline]
    pub fn failure_if(condition: bool, value: T, error: impl Into<Error>) -> Self {
        Self::success_if(!condition, value, error)
    }

    /// Lifts an `Option`, failing with `error` on `None`.
    #[inline]
    pub fn from_option(option: Option<T>, error: impl Into<Error>) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(error.into()),
        }
    }

    /// Lifts a standard `Result` whose error converts into [`Error`].
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<Error>,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }

    /// Returns `true` on the success track.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` on the failure track.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. Reading the value without checking
    /// the track first is a bug in the calling code.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", VALUE_OF_FAILURE),
        }
    }

    /// Borrows the error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self {
            Self::Success(_) => panic!("{}", ERROR_OF_SUCCESS),
            Self::Failure(error) => error,
        }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", VALUE_OF_FAILURE),
        }
    }

    /// Consumes the outcome, returning the error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> Error {
        match self {
            Self::Success(_) => panic!("{}", ERROR_OF_SUCCESS),
            Self::Failure(error) => error,
        }
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn try_value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the error, if any.
    #[must_use]
    #[inline]
    pub fn try_error(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into the success value, discarding any error.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the error, discarding any success value.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<T>` to `Outcome<&T>`, cloning the error if any.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    /// Returns the success value or `default`.
    #[must_use]
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[must_use]
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Converts into a standard `Result`, ready for `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, Outcome};
    ///
    /// fn parse(input: &str) -> Result<i32, Error> {
    ///     let outcome = Outcome::from_option(input.parse::<i32>().ok(), Error::bad_request("not a number"));
    ///     let value = outcome.into_result()?;
    ///     Ok(value + 1)
    /// }
    ///
    /// assert_eq!(parse("41"), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Iterates over the success value, if any.
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.try_value().into_iter()
    }
}

impl<T> From<Error> for Outcome<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Outcome::Failure(error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
