//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rop_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`combine!`], [`constraint!`]
//! - **Types**: [`Outcome`], [`Error`], [`ErrorKind`], [`ValidationError`], [`AggregateError`]
//! - **Traits**: [`Combine`], [`ResultOutcomeExt`], [`OptionOutcomeExt`], [`TransientError`]
//!
//! # Examples
//!
//! ```
//! use rop_rail::prelude::*;
//!
//! fn load_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>()
//!         .outcome_with(|e| Error::validation(e.to_string(), "port"))
//!         .ensure(|port| *port >= 1024, Error::validation("Port is reserved", "port"))
//! }
//!
//! assert!(load_port("8080").is_success());
//! assert!(load_port("80").error().is_validation());
//! ```

// Macros
pub use crate::{combine, constraint};

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{AggregateError, Error, ErrorKind, FieldError, ValidationError};
pub use crate::value_object::{Constraint, ValueObject};

// Traits
pub use crate::outcome::Combine;
pub use crate::traits::{OptionOutcomeExt, ResultOutcomeExt, TransientError};
