//! Async railway combinators.
//!
//! Three shapes are covered, all producing exactly what the synchronous
//! combinator would produce on the awaited values:
//!
//! - right-async: `Outcome::map_async`, `bind_async`, ... take a continuation
//!   returning a future;
//! - left-async: [`FutureOutcomeExt`] chains synchronous continuations onto a
//!   `Future<Output = Outcome<T>>`;
//! - both-async: the `*_async` methods of [`FutureOutcomeExt`].
//!
//! Nothing here depends on a specific runtime.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! rop-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rop_rail::prelude_async::*;
//!
//! async fn load_order(id: u64) -> Outcome<u64> {
//!     Outcome::success_if(id > 0, id, Error::not_found("order not found"))
//! }
//!
//! async fn example() -> String {
//!     load_order(7)
//!         .map(|id| id * 100)
//!         .match_with(|total| format!("total {total}"), |error| error.to_string())
//!         .await
//! }
//! ```

mod combine;
mod future_ext;
mod map_future;
mod outcome_async;

#[cfg(feature = "tracing")]
mod tracing_ext;

pub use combine::combine_all_async;
pub use future_ext::FutureOutcomeExt;
pub use map_future::{MapFuture, TapFuture};

#[cfg(feature = "tracing")]
pub use tracing_ext::{FutureOutcomeTraceExt, OutcomeTraceExt, TracedFuture};
