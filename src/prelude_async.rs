//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async combinators.
//!
//! # Usage
//!
//! ```
//! use rop_rail::prelude_async::*;
//!
//! async fn fetch_balance(account: u64) -> Outcome<i64> {
//!     Outcome::success_if(account != 0, 250, Error::not_found("account not found"))
//! }
//!
//! async fn example() -> Outcome<i64> {
//!     fetch_balance(1)
//!         .ensure(|balance| *balance >= 100, Error::domain("Insufficient funds"))
//!         .map(|balance| balance - 100)
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! - Everything from [`prelude`](crate::prelude)
//! - **Traits**: [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt)
//! - **Functions**: [`combine_all_async`](crate::async_ext::combine_all_async)
//! - **Tracing** (with the `tracing` feature): [`OutcomeTraceExt`](crate::async_ext::OutcomeTraceExt),
//!   [`FutureOutcomeTraceExt`](crate::async_ext::FutureOutcomeTraceExt)

// Re-export everything from sync prelude
pub use crate::prelude::*;

pub use crate::async_ext::{combine_all_async, FutureOutcomeExt};

#[cfg(feature = "tracing")]
pub use crate::async_ext::{FutureOutcomeTraceExt, OutcomeTraceExt};
