//! Railway oriented error handling built around [`Outcome`].
//!
//! An [`Outcome<T>`] is either a success holding a `T` or a failure holding a
//! structured [`Error`]. Fallible steps are chained with combinators that
//! short-circuit on the first failure, while the `combine` family inspects
//! every operand and reports all failures at once. Validation failures on
//! different fields merge into a single [`ValidationError`]; heterogeneous
//! failures escalate into a flat [`AggregateError`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `rop_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use rop_rail::{Error, Outcome};
//!
//! fn parse_quantity(input: &str) -> Outcome<u32> {
//!     Outcome::from_option(input.parse().ok(), Error::validation("Not a number", "quantity"))
//! }
//!
//! let message = parse_quantity("12")
//!     .ensure(|qty| *qty <= 10, Error::domain("Order limit exceeded"))
//!     .map(|qty| qty * 3)
//!     .match_with(|total| format!("total {total}"), |error| error.code().to_string());
//!
//! assert_eq!(message, "domain.error");
//! ```
//!
//! ## Collecting Validation Failures
//!
//! ```
//! use rop_rail::{combine, Error, Outcome};
//!
//! let name: Outcome<&str> = Outcome::failure(Error::validation("Required", "name"));
//! let email: Outcome<&str> = Outcome::failure(Error::validation("Invalid", "email"));
//! let age = Outcome::success(30);
//!
//! let user = combine!(name, email, age);
//! let fields = user.error().as_validation().unwrap().to_dictionary();
//!
//! assert_eq!(fields.keys().collect::<Vec<_>>(), ["email", "name"]);
//! ```
//!
//! ## Escalation
//!
//! ```
//! use rop_rail::{Error, ErrorKind};
//!
//! let error = Error::not_found("user 7").combine(Error::validation("Required", "name"));
//! assert_eq!(error.kind(), ErrorKind::Aggregate);
//! assert_eq!(error.as_aggregate().unwrap().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome`, `Result` and field/message pairs
pub mod convert;
/// Combination and value-object macros
pub mod macros;
/// The `Outcome` type and its synchronous combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for lifting and classifying failures
pub mod traits;
/// Error taxonomy
pub mod types;
/// Constrained primitive wrappers
pub mod value_object;

/// Async combinators (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use convert::*;
pub use outcome::{Combine, Outcome, TupleAppend};
pub use traits::*;
pub use types::{
    AggregateError, BadRequestError, ConflictError, DomainError, Error, ErrorAccumulator,
    ErrorKind, ErrorVec, FieldError, ForbiddenError, NotFoundError, RateLimitError,
    ServiceUnavailableError, UnauthorizedError, UnexpectedError, ValidationError,
};
