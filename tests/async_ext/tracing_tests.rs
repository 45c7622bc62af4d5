//! Tests for tracing integration.

use std::fmt;
use std::sync::{Arc, Mutex};

use rop_rail::prelude_async::*;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Records every event as a `name=value` line.
#[derive(Clone, Default)]
struct Capture {
    events: Arc<Mutex<Vec<String>>>,
}

impl Capture {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

struct Fields(String);

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push_str(&format!("{}={:?};", field.name(), value));
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = Fields(String::new());
        event.record(&mut fields);
        self.events.lock().unwrap().push(fields.0);
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn trace_failure_emits_structured_event() {
    let capture = Capture::default();

    tracing::subscriber::with_default(capture.clone(), || {
        let outcome: Outcome<()> =
            Outcome::failure(Error::not_found("order 7").with_instance("/orders/7"));
        let _ = outcome.trace_failure();
    });

    let events = capture.events();
    assert_eq!(events.len(), 1);
    assert!(events[0].contains(r#"code="not.found.error""#));
    assert!(events[0].contains("kind=not_found"));
    assert!(events[0].contains(r#"detail="order 7""#));
    assert!(events[0].contains(r#"instance=Some("/orders/7")"#) || events[0].contains(r#"instance="/orders/7""#));
}

#[test]
fn trace_failure_is_silent_on_success() {
    let capture = Capture::default();

    tracing::subscriber::with_default(capture.clone(), || {
        let _ = Outcome::success(1).trace_failure();
    });

    assert!(capture.events().is_empty());
}

#[test]
fn trace_failure_in_names_the_span() {
    let capture = Capture::default();

    tracing::subscriber::with_default(capture.clone(), || {
        let span = tracing::info_span!("checkout");
        let _ = Outcome::<()>::failure(Error::conflict("stale cart")).trace_failure_in(&span);
    });

    let events = capture.events();
    assert!(events[0].contains(r#"span="checkout""#));
}

#[tokio::test]
async fn traced_future_reports_failure_once_resolved() {
    let capture = Capture::default();
    let _guard = tracing::subscriber::set_default(capture.clone());

    let span = tracing::info_span!("payment");
    let outcome = async { Outcome::<u32>::failure(Error::service_unavailable("gateway down")) }
        .traced_in(span)
        .await;

    assert!(outcome.error().is_service_unavailable());
    let events = capture.events();
    assert_eq!(events.len(), 1);
    assert!(events[0].contains(r#"span="payment""#));
    assert!(events[0].contains("kind=service_unavailable"));
}

#[tokio::test]
async fn traced_future_passes_success_through() {
    let capture = Capture::default();
    let _guard = tracing::subscriber::set_default(capture.clone());

    let outcome = async { Outcome::success(5) }.traced().map(|x| x + 1).await;

    assert_eq!(outcome, Outcome::Success(6));
    assert!(capture.events().is_empty());
}
