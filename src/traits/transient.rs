//! Transient error classification for retry decisions.
//!
//! This crate does not schedule retries. It classifies failures so that a
//! caller can decide, typically through
//! [`compensate_when`](crate::Outcome::compensate_when), whether a failed
//! step is worth attempting again.
//!
//! # Examples
//!
//! ```
//! use rop_rail::traits::TransientError;
//! use rop_rail::{Error, Outcome};
//!
//! let mut attempts = 0;
//! let outcome = Outcome::<u32>::failure(Error::service_unavailable("db down"))
//!     .compensate_when(Error::is_transient, |_| {
//!         attempts += 1;
//!         Outcome::success(7)
//!     });
//!
//! assert_eq!(outcome, Outcome::Success(7));
//! assert_eq!(attempts, 1);
//! ```

use crate::outcome::Outcome;
use crate::types::error::Error;

/// Classification of errors as transient or permanent.
///
/// Transient errors are temporary failures that may succeed if retried, such
/// as rate limiting or temporary service unavailability.
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    ///
    /// Default implementation returns `!self.is_transient()`.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }
}

/// Rate limiting and unavailable services are transient. An aggregate is
/// transient only when every error it holds is.
impl TransientError for Error {
    fn is_transient(&self) -> bool {
        match self {
            Error::RateLimit(_) | Error::ServiceUnavailable(_) => true,
            Error::Aggregate(aggregate) => aggregate.iter().all(TransientError::is_transient),
            Error::Validation(_)
            | Error::NotFound(_)
            | Error::Conflict(_)
            | Error::Domain(_)
            | Error::Forbidden(_)
            | Error::Unauthorized(_)
            | Error::Unexpected(_)
            | Error::BadRequest(_) => false,
        }
    }
}

impl Error {
    /// Inherent shortcut for [`TransientError::is_transient`], usable as a
    /// predicate path such as `Error::is_transient`.
    #[inline]
    pub fn is_transient(&self) -> bool {
        TransientError::is_transient(self)
    }
}

/// Extension methods for outcomes whose failure may be transient.
pub trait TransientErrorExt<T> {
    /// Returns `Some(self)` when the outcome failed transiently, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::traits::TransientErrorExt;
    /// use rop_rail::{Error, Outcome};
    ///
    /// assert!(Outcome::<()>::failure(Error::rate_limit("slow down")).retry_if_transient().is_some());
    /// assert!(Outcome::<()>::failure(Error::not_found("gone")).retry_if_transient().is_none());
    /// assert!(Outcome::success(()).retry_if_transient().is_none());
    /// ```
    fn retry_if_transient(self) -> Option<Outcome<T>>;
}

impl<T> TransientErrorExt<T> for Outcome<T> {
    fn retry_if_transient(self) -> Option<Outcome<T>> {
        if matches!(&self, Outcome::Failure(error) if error.is_transient()) {
            Some(self)
        } else {
            None
        }
    }
}
