//! Single-payload error kinds.
//!
//! Every kind in this module carries the same three pieces of information
//! (`detail`, `code`, `instance`) and differs only in its default code and in
//! the [`Error`](crate::Error) variant it converts into.

use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::error::Error;

macro_rules! simple_error_kind {
    (
        $(#[$meta:meta])*
        $name:ident => $variant:ident, $code:literal
    ) => {
        $(#[$meta])*
        #[must_use]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            detail: String,
            code: String,
            instance: Option<String>,
        }

        impl $name {
            /// Code used when none is supplied.
            pub const DEFAULT_CODE: &'static str = $code;

            /// Creates the error with the default code and no instance.
            ///
            /// `detail` is expected to be non-empty but is not checked here;
            /// [`try_new`](Self::try_new) rejects an empty one.
            #[inline]
            pub fn new(detail: impl Into<String>) -> Self {
                Self { detail: detail.into(), code: String::from(Self::DEFAULT_CODE), instance: None }
            }

            /// Fallible form of [`new`](Self::new) that rejects an empty `detail`.
            pub fn try_new(detail: impl Into<String>) -> Result<Self, Error> {
                let detail = detail.into();
                if detail.is_empty() {
                    return Err(UnexpectedError::new(concat!(
                        stringify!($name),
                        " detail must not be empty"
                    ))
                    .into());
                }
                Ok(Self::new(detail))
            }

            /// Replaces the machine-readable code.
            #[inline]
            pub fn with_code(mut self, code: impl Into<String>) -> Self {
                self.code = code.into();
                self
            }

            /// Sets the identifier of the failing resource or request.
            #[inline]
            pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
                self.instance = Some(instance.into());
                self
            }

            #[inline]
            pub fn detail(&self) -> &str {
                &self.detail
            }

            #[inline]
            pub fn code(&self) -> &str {
                &self.code
            }

            #[inline]
            pub fn instance(&self) -> Option<&str> {
                self.instance.as_deref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}: {}", self.code, self.detail)?;
                if let Some(instance) = &self.instance {
                    write!(f, " (instance: {})", instance)?;
                }
                Ok(())
            }
        }

        impl From<$name> for Error {
            #[inline]
            fn from(error: $name) -> Self {
                Error::$variant(error)
            }
        }
    };
}

simple_error_kind! {
    /// The requested entity or resource does not exist.
    NotFoundError => NotFound, "not.found.error"
}

simple_error_kind! {
    /// The operation conflicts with the current state of the resource.
    ///
    /// Also used when exactly one match was required and several were found.
    ConflictError => Conflict, "conflict.error"
}

simple_error_kind! {
    /// A business-rule invariant was violated.
    DomainError => Domain, "domain.error"
}

simple_error_kind! {
    /// The caller is authenticated but not allowed to perform the operation.
    ForbiddenError => Forbidden, "forbidden.error"
}

simple_error_kind! {
    /// The caller could not be authenticated.
    UnauthorizedError => Unauthorized, "unauthorized.error"
}

simple_error_kind! {
    /// The caller exceeded a rate limit. Transient.
    RateLimitError => RateLimit, "rate.limit.error"
}

simple_error_kind! {
    /// A dependency is temporarily unavailable. Transient.
    ServiceUnavailableError => ServiceUnavailable, "service.unavailable.error"
}

simple_error_kind! {
    /// Catch-all for conditions the domain did not anticipate.
    UnexpectedError => Unexpected, "unexpected.error"
}

simple_error_kind! {
    /// The request itself is malformed.
    BadRequestError => BadRequest, "bad.request.error"
}
