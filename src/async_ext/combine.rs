use alloc::vec::Vec;
use core::future::Future;

use crate::outcome::Outcome;
use crate::types::ErrorAccumulator;

/// Awaits every future in order and combines their outcomes.
///
/// Futures are awaited one after another, so the helper stays
/// runtime-neutral; spawn or join them first when concurrency matters. When
/// any outcome failed, the result carries the combined error of every failed
/// outcome in input order; otherwise it carries all values in input order.
///
/// # Examples
///
/// ```rust
/// use rop_rail::prelude_async::*;
///
/// async fn check_stock(sku: &str) -> Outcome<u32> {
///     Outcome::success_if(sku != "gone", 1, Error::not_found(format!("{sku} is gone")))
/// }
///
/// async fn example() {
///     let stock = combine_all_async(["a", "gone", "b"].map(check_stock)).await;
///     assert!(stock.error().is_not_found());
/// }
/// ```
pub async fn combine_all_async<T, Fut, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T>>,
{
    let iter = outcomes.into_iter();
    let (lower, upper) = iter.size_hint();
    let mut values = Vec::with_capacity(upper.unwrap_or(lower));
    let mut errors = ErrorAccumulator::new();

    for future in iter {
        if let Some(value) = errors.take(future.await) {
            if errors.is_empty() {
                values.push(value);
            }
        }
    }

    errors.finish(|| values)
}
