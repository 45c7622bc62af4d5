use std::cell::Cell;

use rop_rail::{Error, Outcome};

fn not_found() -> Outcome<i32> {
    Outcome::failure(Error::not_found("missing"))
}

#[test]
fn map_transforms_success_only() {
    assert_eq!(Outcome::success(2).map(|x| x.to_string()), Outcome::Success("2".to_string()));
    assert_eq!(not_found().map(|x| x.to_string()), Outcome::Failure(Error::not_found("missing")));
}

#[test]
fn bind_skips_continuation_on_failure() {
    let calls = Cell::new(0);
    let result = not_found().bind(|x| {
        calls.set(calls.get() + 1);
        Outcome::success(x + 1)
    });

    assert_eq!(calls.get(), 0);
    assert!(result.error().is_not_found());
}

#[test]
fn bind_propagates_continuation_failure() {
    let result = Outcome::success(3).bind(|_| Outcome::<i32>::failure(Error::conflict("taken")));
    assert!(result.error().is_conflict());
}

#[test]
fn validate_is_bind() {
    let check = |x: i32| Outcome::success_if(x < 10, x, Error::validation("Too large", "x"));
    assert_eq!(Outcome::success(3).validate(check), Outcome::success(3).bind(check));
    assert_eq!(Outcome::success(30).validate(check), Outcome::success(30).bind(check));
}

#[test]
fn ensure_does_not_evaluate_predicate_on_failure() {
    let calls = Cell::new(0);
    let result = not_found().ensure(
        |_| {
            calls.set(calls.get() + 1);
            true
        },
        Error::domain("never"),
    );

    assert_eq!(calls.get(), 0);
    assert!(result.error().is_not_found());
}

#[test]
fn ensure_with_builds_error_from_value() {
    let result = Outcome::success(120)
        .ensure_with(|age| *age < 100, |age| Error::validation(format!("{age} is not plausible"), "age"));

    assert_eq!(result.error().detail(), "120 is not plausible");
}

#[test]
fn ensure_outcome_adopts_check_error() {
    let unique = |name: &&str| {
        Outcome::success_if(*name != "taken", (), Error::conflict("name already registered"))
    };

    assert_eq!(Outcome::success("free").ensure_outcome(unique), Outcome::Success("free"));
    assert!(Outcome::success("taken").ensure_outcome(unique).error().is_conflict());
}

#[test]
fn tap_runs_on_success_only() {
    let seen = Cell::new(0);
    let ok = Outcome::success(4).tap(|x| seen.set(*x));
    assert_eq!(seen.get(), 4);
    assert_eq!(ok, Outcome::Success(4));

    let failed = not_found().tap(|_| seen.set(99));
    assert_eq!(seen.get(), 4);
    assert!(failed.is_failure());
}

#[test]
fn tap_error_runs_on_failure_only() {
    let seen = Cell::new(false);
    let _ = Outcome::success(1).tap_error(|_| seen.set(true));
    assert!(!seen.get());

    let _ = not_found().tap_error(|e| seen.set(e.is_not_found()));
    assert!(seen.get());
}

#[test]
fn map_error_rewrites_failure() {
    let result = not_found().map_error(|e| e.with_code("order.missing"));
    assert_eq!(result.error().code(), "order.missing");

    assert_eq!(Outcome::success(1).map_error(|_| Error::unexpected("x")), Outcome::Success(1));
}

#[test]
fn match_with_and_finally_fold_both_tracks() {
    let describe = |o: Outcome<i32>| o.match_with(|x| format!("ok {x}"), |e| format!("err {}", e.code()));
    assert_eq!(describe(Outcome::success(1)), "ok 1");
    assert_eq!(describe(not_found()), "err not.found.error");

    let status = not_found().finally(|_| 200, |_| 404);
    assert_eq!(status, 404);
}

#[test]
fn compensate_replaces_any_failure() {
    assert_eq!(not_found().compensate(|_| Outcome::success(0)), Outcome::Success(0));

    let calls = Cell::new(0);
    let ok = Outcome::success(5).compensate(|_| {
        calls.set(calls.get() + 1);
        Outcome::success(0)
    });
    assert_eq!(ok, Outcome::Success(5));
    assert_eq!(calls.get(), 0);
}

#[test]
fn compensate_when_checks_predicate() {
    let recovered = not_found().compensate_when(Error::is_not_found, |_| Outcome::success(1));
    assert_eq!(recovered, Outcome::Success(1));

    let untouched = not_found().compensate_when(Error::is_conflict, |_| Outcome::success(1));
    assert!(untouched.error().is_not_found());

    let recovery_failed = not_found()
        .recover_on_failure(|_| true, |_| Outcome::failure(Error::service_unavailable("still down")));
    assert!(recovery_failed.error().is_service_unavailable());
}

#[test]
fn flatten_removes_nesting() {
    let nested = Outcome::success(Outcome::success(1));
    assert_eq!(nested.flatten(), Outcome::Success(1));

    let inner_failure: Outcome<Outcome<i32>> = Outcome::success(not_found());
    assert!(inner_failure.flatten().error().is_not_found());
}

#[test]
fn chain_stops_at_first_failure() {
    let trail = std::cell::RefCell::new(Vec::new());

    let result = Outcome::success(10)
        .tap(|_| trail.borrow_mut().push("first"))
        .ensure(|x| *x > 100, Error::validation("Too small", "x"))
        .tap(|_| trail.borrow_mut().push("second"))
        .map(|x| x * 2);

    assert_eq!(*trail.borrow(), ["first"]);
    assert_eq!(result.error().code(), "validation.error");
}
