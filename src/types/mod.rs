//! Error taxonomy carried by failed outcomes.
//!
//! This module provides the closed [`Error`] enum, one concrete struct per
//! failure kind, the field-level [`ValidationError`] model and the flat
//! [`AggregateError`] produced when heterogeneous failures are combined.
//!
//! # Examples
//!
//! ```
//! use rop_rail::{Error, ErrorKind};
//!
//! let err = Error::validation("Required", "email")
//!     .combine(Error::service_unavailable("smtp relay is down"));
//!
//! assert_eq!(err.kind(), ErrorKind::Aggregate);
//! let kinds: Vec<_> = err.as_aggregate().unwrap().iter().map(|e| e.kind()).collect();
//! assert_eq!(kinds, [ErrorKind::Validation, ErrorKind::ServiceUnavailable]);
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod aggregate_error;
pub mod error;
pub mod kinds;
pub mod validation_error;

pub use accumulator::ErrorAccumulator;
pub use aggregate_error::AggregateError;
pub use error::{Error, ErrorKind};
pub use kinds::*;
pub use validation_error::{FieldError, ValidationError};

/// SmallVec-backed collection used for field errors and their messages.
///
/// Uses inline storage for one element, the common case of a single field
/// carrying a single message.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
