use rop_rail::{Error, ErrorKind};

fn sample() -> Error {
    Error::not_found("user").combine(Error::conflict("locked")).combine(Error::rate_limit("slow down"))
}

#[test]
fn exposes_errors_in_combination_order() {
    let error = sample();
    let aggregate = error.as_aggregate().unwrap();

    assert_eq!(aggregate.len(), 3);
    assert!(!aggregate.is_empty());
    let kinds: Vec<_> = aggregate.into_iter().map(Error::kind).collect();
    assert_eq!(kinds, [ErrorKind::NotFound, ErrorKind::Conflict, ErrorKind::RateLimit]);
}

#[test]
fn builders_apply_through_error() {
    let error = sample().with_code("checkout.failed").with_instance("/checkout/3");
    assert_eq!(error.code(), "checkout.failed");
    assert_eq!(error.instance(), Some("/checkout/3"));
    assert_eq!(error.detail(), "Aggregated error");
}

#[test]
fn display_summarizes_or_lists() {
    let error = sample();
    assert_eq!(error.to_string(), "aggregate.error: Aggregated error (3 errors)");

    let listed = format!("{:#}", error);
    assert!(listed.contains("\n  - not.found.error: user"));
    assert!(listed.contains("\n  - rate.limit.error: slow down"));
}

#[test]
fn into_errors_returns_owned_atoms() {
    let Error::Aggregate(aggregate) = sample() else {
        panic!("expected aggregate");
    };
    let errors = aggregate.into_errors();
    assert_eq!(errors[1], Error::conflict("locked"));
}
