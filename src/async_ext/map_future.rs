//! Future adapters for the synchronous-continuation combinators.
//!
//! [`MapFuture`] and [`TapFuture`] wrap a `Future<Output = Outcome<T>>` and
//! apply their continuation only once the inner future has resolved. They
//! hold no extra state beyond the continuation itself.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::outcome::Outcome;

pin_project! {
    /// Future returned by [`FutureOutcomeExt::map`](super::FutureOutcomeExt::map).
    ///
    /// # Cancel Safety
    ///
    /// `MapFuture` is cancel-safe if the inner future is cancel-safe. The
    /// mapping function runs inside the `poll` call that observes the inner
    /// outcome, and only on the success track.
    #[must_use = "futures do nothing unless polled"]
    pub struct MapFuture<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> MapFuture<Fut, F> {
    /// Creates a new `MapFuture` from the antecedent future and mapping function.
    #[inline]
    pub fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F, T, K> Future for MapFuture<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> K,
{
    type Output = Outcome<K>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| {
            let f = this.f.take().expect("MapFuture polled after completion; this is a bug");
            outcome.map(f)
        })
    }
}

impl<Fut, F, T, K> FusedFuture for MapFuture<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> K,
{
    fn is_terminated(&self) -> bool {
        self.f.is_none()
    }
}

pin_project! {
    /// Future returned by [`FutureOutcomeExt::tap`](super::FutureOutcomeExt::tap).
    ///
    /// The side effect runs at most once, on the success track, after the
    /// antecedent resolved.
    #[must_use = "futures do nothing unless polled"]
    pub struct TapFuture<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> TapFuture<Fut, F> {
    /// Creates a new `TapFuture` from the antecedent future and side effect.
    #[inline]
    pub fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F, T> Future for TapFuture<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(&T),
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| {
            let f = this.f.take().expect("TapFuture polled after completion; this is a bug");
            outcome.tap(f)
        })
    }
}

impl<Fut, F, T> FusedFuture for TapFuture<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(&T),
{
    fn is_terminated(&self) -> bool {
        self.f.is_none()
    }
}
