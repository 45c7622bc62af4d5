//! Async Service Pipeline
//!
//! Chaining async lookups with synchronous checks and retrying a step only
//! when it failed for a transient reason.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use rop_rail::prelude_async::*;

static INVENTORY_CALLS: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Clone)]
struct Order {
    id: u64,
    sku: &'static str,
    quantity: u32,
}

async fn find_order(id: u64) -> Outcome<Order> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    Outcome::from_option(
        (id == 42).then_some(Order { id, sku: "KB-01", quantity: 3 }),
        Error::not_found(format!("order {id} does not exist")).with_instance(format!("/orders/{id}")),
    )
}

// Fails on the first call to show recovery from a transient failure.
async fn reserve_stock(order: Order) -> Outcome<Order> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    if INVENTORY_CALLS.fetch_add(1, Ordering::SeqCst) == 0 {
        return Outcome::failure(Error::service_unavailable("inventory is restarting"));
    }
    Outcome::success(order)
}

async fn checkout(id: u64) -> Outcome<String> {
    find_order(id)
        .ensure(|order| order.quantity <= 10, Error::domain("Order limit exceeded"))
        .bind_async(|order| async move {
            let retry = order.clone();
            reserve_stock(order)
                .compensate_when_async(Error::is_transient, |_| reserve_stock(retry))
                .await
        })
        .map(|order| format!("order {} reserved {} x {}", order.id, order.quantity, order.sku))
        .await
}

#[tokio::main]
async fn main() {
    for id in [42, 7] {
        let message = checkout(id)
            .match_with(|ok| ok, |error| format!("failed: {error}"))
            .await;
        println!("{message}");
    }

    let all = combine_all_async([find_order(42), find_order(1), find_order(2)]).await;
    match all.try_error().and_then(Error::as_aggregate) {
        Some(aggregate) => println!("{aggregate:#}"),
        None => println!("{all:?}"),
    }
}
