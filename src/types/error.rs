//! The closed error taxonomy carried by failed outcomes.
//!
//! [`Error`] is an enum with one variant per failure kind, so every
//! exhaustive `match` over it is checked by the compiler when a kind is added.
//!
//! # Examples
//!
//! ```
//! use rop_rail::{Error, ErrorKind};
//!
//! let err = Error::not_found("order 42 does not exist").with_instance("/orders/42");
//!
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//! assert_eq!(err.code(), "not.found.error");
//! assert_eq!(err.instance(), Some("/orders/42"));
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::aggregate_error::AggregateError;
use crate::types::kinds::{
    BadRequestError, ConflictError, DomainError, ForbiddenError, NotFoundError, RateLimitError,
    ServiceUnavailableError, UnauthorizedError, UnexpectedError,
};
use crate::types::validation_error::ValidationError;

/// Discriminant of an [`Error`] without its payload.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Domain,
    Forbidden,
    Unauthorized,
    RateLimit,
    ServiceUnavailable,
    Unexpected,
    BadRequest,
    Aggregate,
}

impl ErrorKind {
    /// Stable lowercase name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Domain => "domain",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::RateLimit => "rate_limit",
            ErrorKind::ServiceUnavailable => "service_unavailable",
            ErrorKind::Unexpected => "unexpected",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Aggregate => "aggregate",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured, immutable failure.
///
/// Equality is by value: two errors are equal when they are the same kind and
/// carry the same detail, code, instance and (for validation and aggregate
/// errors) the same inner entries.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "error", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    Validation(ValidationError),
    NotFound(NotFoundError),
    Conflict(ConflictError),
    Domain(DomainError),
    Forbidden(ForbiddenError),
    Unauthorized(UnauthorizedError),
    RateLimit(RateLimitError),
    ServiceUnavailable(ServiceUnavailableError),
    Unexpected(UnexpectedError),
    BadRequest(BadRequestError),
    Aggregate(AggregateError),
}

macro_rules! dispatch {
    ($error:expr, $inner:ident => $body:expr) => {
        match $error {
            Error::Validation($inner) => $body,
            Error::NotFound($inner) => $body,
            Error::Conflict($inner) => $body,
            Error::Domain($inner) => $body,
            Error::Forbidden($inner) => $body,
            Error::Unauthorized($inner) => $body,
            Error::RateLimit($inner) => $body,
            Error::ServiceUnavailable($inner) => $body,
            Error::Unexpected($inner) => $body,
            Error::BadRequest($inner) => $body,
            Error::Aggregate($inner) => $body,
        }
    };
    ($error:expr, $inner:ident => $body:expr, rewrap) => {
        match $error {
            Error::Validation($inner) => Error::Validation($body),
            Error::NotFound($inner) => Error::NotFound($body),
            Error::Conflict($inner) => Error::Conflict($body),
            Error::Domain($inner) => Error::Domain($body),
            Error::Forbidden($inner) => Error::Forbidden($body),
            Error::Unauthorized($inner) => Error::Unauthorized($body),
            Error::RateLimit($inner) => Error::RateLimit($body),
            Error::ServiceUnavailable($inner) => Error::ServiceUnavailable($body),
            Error::Unexpected($inner) => Error::Unexpected($body),
            Error::BadRequest($inner) => Error::BadRequest($body),
            Error::Aggregate($inner) => Error::Aggregate($body),
        }
    };
}

impl Error {
    /// A single field failed validation; `field_detail` is also the error detail.
    #[inline]
    pub fn validation(field_detail: impl Into<String>, field_name: impl Into<String>) -> Self {
        Error::Validation(ValidationError::new(field_detail, field_name))
    }

    #[inline]
    pub fn not_found(detail: impl Into<String>) -> Self {
        Error::NotFound(NotFoundError::new(detail))
    }

    #[inline]
    pub fn conflict(detail: impl Into<String>) -> Self {
        Error::Conflict(ConflictError::new(detail))
    }

    #[inline]
    pub fn domain(detail: impl Into<String>) -> Self {
        Error::Domain(DomainError::new(detail))
    }

    #[inline]
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Error::Forbidden(ForbiddenError::new(detail))
    }

    #[inline]
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Error::Unauthorized(UnauthorizedError::new(detail))
    }

    #[inline]
    pub fn rate_limit(detail: impl Into<String>) -> Self {
        Error::RateLimit(RateLimitError::new(detail))
    }

    #[inline]
    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        Error::ServiceUnavailable(ServiceUnavailableError::new(detail))
    }

    #[inline]
    pub fn unexpected(detail: impl Into<String>) -> Self {
        Error::Unexpected(UnexpectedError::new(detail))
    }

    #[inline]
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Error::BadRequest(BadRequestError::new(detail))
    }

    /// Replaces the machine-readable code, whatever the kind.
    pub fn with_code(self, code: impl Into<String>) -> Self {
        let code = code.into();
        dispatch!(self, inner => inner.with_code(code), rewrap)
    }

    /// Sets the identifier of the failing resource or request, whatever the kind.
    pub fn with_instance(self, instance: impl Into<String>) -> Self {
        let instance = instance.into();
        dispatch!(self, inner => inner.with_instance(instance), rewrap)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Conflict(_) => ErrorKind::Conflict,
            Error::Domain(_) => ErrorKind::Domain,
            Error::Forbidden(_) => ErrorKind::Forbidden,
            Error::Unauthorized(_) => ErrorKind::Unauthorized,
            Error::RateLimit(_) => ErrorKind::RateLimit,
            Error::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            Error::Unexpected(_) => ErrorKind::Unexpected,
            Error::BadRequest(_) => ErrorKind::BadRequest,
            Error::Aggregate(_) => ErrorKind::Aggregate,
        }
    }

    /// Human-readable description.
    pub fn detail(&self) -> &str {
        dispatch!(self, inner => inner.detail())
    }

    /// Stable machine-readable classifier.
    pub fn code(&self) -> &str {
        dispatch!(self, inner => inner.code())
    }

    /// Identifier of the failing resource or request, if any.
    pub fn instance(&self) -> Option<&str> {
        dispatch!(self, inner => inner.instance())
    }

    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    #[inline]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }

    #[inline]
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }

    #[inline]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Error::Forbidden(_))
    }

    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }

    #[inline]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::RateLimit(_))
    }

    #[inline]
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, Error::ServiceUnavailable(_))
    }

    #[inline]
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Error::Unexpected(_))
    }

    #[inline]
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Error::BadRequest(_))
    }

    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Error::Aggregate(_))
    }

    #[inline]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(inner) => Some(inner),
            _ => None,
        }
    }

    #[inline]
    pub fn as_aggregate(&self) -> Option<&AggregateError> {
        match self {
            Error::Aggregate(inner) => Some(inner),
            _ => None,
        }
    }

    /// Combines two independent failures into one.
    ///
    /// Two validation errors merge field-wise into a single
    /// [`ValidationError`]. Any other pair escalates into an
    /// [`AggregateError`] whose list is kept flat: existing aggregates are
    /// spliced in rather than nested, and every validation failure is folded
    /// into the first validation entry. The result of a chain of combines is
    /// therefore the same whichever way the chain is grouped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Error;
    ///
    /// let merged = Error::validation("Required", "email")
    ///     .combine(Error::validation("Required", "password"));
    /// assert_eq!(merged.as_validation().unwrap().field_errors().len(), 2);
    ///
    /// let aggregate = Error::not_found("no user")
    ///     .combine(Error::conflict("locked"))
    ///     .combine(Error::domain("closed"));
    /// assert_eq!(aggregate.as_aggregate().unwrap().len(), 3);
    /// ```
    pub fn combine(self, other: Error) -> Error {
        match (self, other) {
            (Error::Validation(left), Error::Validation(right)) => {
                Error::Validation(left.merge(&right))
            },
            (left, right) => {
                let mut atoms = Vec::new();
                left.push_atoms(&mut atoms);
                right.push_atoms(&mut atoms);
                Error::Aggregate(AggregateError::from_atoms(atoms))
            },
        }
    }

    /// Appends `self` to a flat atom list, splicing aggregates and folding
    /// validations into the first validation entry.
    pub(crate) fn push_atoms(self, atoms: &mut Vec<Error>) {
        match self {
            Error::Aggregate(aggregate) => {
                for error in aggregate.into_errors() {
                    push_atom(atoms, error);
                }
            },
            error => push_atom(atoms, error),
        }
    }
}

fn push_atom(atoms: &mut Vec<Error>, error: Error) {
    match error {
        Error::Validation(incoming) => {
            let existing = atoms.iter_mut().find_map(|atom| match atom {
                Error::Validation(existing) => Some(existing),
                _ => None,
            });
            match existing {
                Some(existing) => *existing = existing.merge(&incoming),
                None => atoms.push(Error::Validation(incoming)),
            }
        },
        error => atoms.push(error),
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, inner => fmt::Display::fmt(inner, f))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
