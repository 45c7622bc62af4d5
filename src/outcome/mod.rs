//! The railway [`Outcome`] type and its synchronous combinators.
//!
//! An [`Outcome<T>`] is either on the success track (holding a `T`) or on the
//! failure track (holding an [`Error`](crate::Error)). Combinators chain
//! fallible steps and short-circuit on the first failure, except for the
//! `combine` family, which deliberately inspects every operand and reports all
//! failures together.
//!
//! # Key Components
//!
//! - [`Outcome`] - the success/failure container
//! - [`Combine`] / [`TupleAppend`] - tuple combination for 2 to 9 operands
//! - `FromIterator` - collecting many outcomes while aggregating errors
//!
//! # Examples
//!
//! ```
//! use rop_rail::{Error, Outcome};
//!
//! fn parse_age(input: &str) -> Outcome<u8> {
//!     Outcome::from_option(input.parse().ok(), Error::validation("Not a number", "age"))
//! }
//!
//! let age = parse_age("42")
//!     .ensure(|age| *age >= 18, Error::validation("Too young", "age"))
//!     .map(u32::from);
//!
//! assert_eq!(age, Outcome::Success(42));
//! ```
pub mod combinators;
pub mod combine;
pub mod core;
pub mod iter;

pub use self::combine::{Combine, TupleAppend};
pub use self::core::Outcome;
