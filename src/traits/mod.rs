//! Extension traits around [`Outcome`](crate::Outcome).
//!
//! - [`ResultOutcomeExt`] / [`OptionOutcomeExt`]: lifting standard types onto the railway
//! - [`TransientError`]: classification of failures worth retrying
//! - [`TransientErrorExt`]: retry gating for failed outcomes
//!
//! # Examples
//!
//! ```
//! use rop_rail::traits::{OptionOutcomeExt, TransientError};
//! use rop_rail::Error;
//!
//! let outcome = Some(3).ok_or_outcome(Error::not_found("missing"));
//! assert!(outcome.is_success());
//! assert!(Error::rate_limit("slow down").is_transient());
//! ```

pub mod into_outcome;
pub mod transient;

pub use into_outcome::{OptionOutcomeExt, ResultOutcomeExt};
pub use transient::{TransientError, TransientErrorExt};
