//! Tracing integration.
//!
//! Failures can be reported as structured `tracing` events without leaving
//! the railway. Nothing is emitted for successful outcomes.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! rop-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::outcome::Outcome;
use crate::types::error::Error;

fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("none")
}

fn emit(error: &Error, span: &Span) {
    tracing::warn!(
        code = error.code(),
        kind = %error.kind(),
        detail = error.detail(),
        instance = error.instance(),
        span = span_name(span),
        "outcome failed"
    );
}

/// Reports failed outcomes as `tracing` events.
///
/// # Example
///
/// ```rust
/// use rop_rail::async_ext::OutcomeTraceExt;
/// use rop_rail::{Error, Outcome};
///
/// let outcome: Outcome<u32> = Outcome::failure(Error::not_found("order 7"));
/// let outcome = outcome.trace_failure();
/// assert!(outcome.is_failure());
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Emits a `WARN` event for a failure, attributed to the current span.
    fn trace_failure(self) -> Self {
        self.trace_failure_in(&Span::current())
    }

    /// Emits a `WARN` event for a failure, attributed to `span`.
    fn trace_failure_in(self, span: &Span) -> Self;
}

impl<T> OutcomeTraceExt for Outcome<T> {
    fn trace_failure_in(self, span: &Span) -> Self {
        if let Outcome::Failure(error) = &self {
            let _entered = span.enter();
            emit(error, span);
        }
        self
    }
}

/// Reports the failure of a pending outcome once it resolves.
pub trait FutureOutcomeTraceExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Captures the current span now and reports a failure inside it later.
    fn traced(self) -> TracedFuture<Self> {
        TracedFuture { inner: self, span: Span::current() }
    }

    /// Reports a failure inside `span`.
    fn traced_in(self, span: Span) -> TracedFuture<Self> {
        TracedFuture { inner: self, span }
    }
}

impl<F, T> FutureOutcomeTraceExt<T> for F where F: Future<Output = Outcome<T>> {}

pin_project! {
    /// Future wrapper that reports a failed outcome.
    ///
    /// Created by [`FutureOutcomeTraceExt::traced`] or [`FutureOutcomeTraceExt::traced_in`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TracedFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T> Future for TracedFuture<F>
where
    F: Future<Output = Outcome<T>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(outcome) => Poll::Ready(outcome.trace_failure_in(this.span)),
            Poll::Pending => Poll::Pending,
        }
    }
}
