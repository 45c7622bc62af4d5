use rop_rail::{Error, Outcome, ValidationError};

#[test]
fn success_and_failure_are_mutually_exclusive() {
    let ok = Outcome::success(1);
    assert!(ok.is_success());
    assert!(!ok.is_failure());

    let failed: Outcome<i32> = Outcome::failure(Error::conflict("duplicate"));
    assert!(failed.is_failure());
    assert!(!failed.is_success());
}

#[test]
fn failure_accepts_concrete_error_kinds() {
    let failed: Outcome<()> = Outcome::failure(ValidationError::new("Required", "email"));
    assert!(failed.error().is_validation());
}

#[test]
fn value_and_error_accessors() {
    let ok = Outcome::success("value");
    assert_eq!(*ok.value(), "value");
    assert_eq!(ok.try_error(), None);

    let failed: Outcome<&str> = Outcome::failure(Error::not_found("missing"));
    assert_eq!(failed.error().detail(), "missing");
    assert_eq!(failed.try_value(), None);
}

#[test]
#[should_panic(expected = "attempted to access the value of a failed outcome")]
fn value_on_failure_panics() {
    let failed: Outcome<i32> = Outcome::failure(Error::not_found("missing"));
    let _ = failed.value();
}

#[test]
#[should_panic(expected = "attempted to access the error of a successful outcome")]
fn error_on_success_panics() {
    let _ = Outcome::success(1).error();
}

#[test]
#[should_panic(expected = "attempted to access the value of a failed outcome")]
fn into_value_on_failure_panics() {
    let failed: Outcome<i32> = Outcome::failure(Error::unexpected("boom"));
    let _ = failed.into_value();
}

#[test]
#[should_panic(expected = "attempted to access the error of a successful outcome")]
fn into_error_on_success_panics() {
    let _ = Outcome::success(1).into_error();
}

#[test]
fn conditional_constructors() {
    let err = Error::domain("closed");
    assert_eq!(Outcome::success_if(true, 1, err.clone()), Outcome::Success(1));
    assert_eq!(Outcome::success_if(false, 1, err.clone()), Outcome::Failure(err.clone()));
    assert_eq!(Outcome::failure_if(true, 1, err.clone()), Outcome::Failure(err.clone()));
    assert_eq!(Outcome::failure_if(false, 1, err), Outcome::Success(1));
}

#[test]
fn from_option_and_result() {
    assert_eq!(Outcome::from_option(Some(3), Error::not_found("x")), Outcome::Success(3));
    assert!(Outcome::<i32>::from_option(None, Error::not_found("x")).error().is_not_found());

    let ok: Result<i32, Error> = Ok(1);
    assert_eq!(Outcome::from_result(ok), Outcome::Success(1));

    let err: Result<i32, Error> = Err(Error::forbidden("no"));
    let outcome: Outcome<i32> = err.into();
    assert!(outcome.error().is_forbidden());
}

#[test]
fn error_converts_into_failed_outcome() {
    fn load() -> Outcome<u32> {
        Error::unauthorized("token expired").into()
    }

    assert!(load().error().is_unauthorized());
}

#[test]
fn into_result_supports_question_mark() {
    fn double(outcome: Outcome<i32>) -> Result<i32, Error> {
        let value = outcome.into_result()?;
        Ok(value * 2)
    }

    assert_eq!(double(Outcome::success(4)), Ok(8));
    assert_eq!(double(Outcome::failure(Error::bad_request("nan"))), Err(Error::bad_request("nan")));

    let as_result: Result<i32, Error> = Outcome::success(1).into();
    assert_eq!(as_result, Ok(1));
}

#[test]
fn option_style_accessors() {
    assert_eq!(Outcome::success(1).ok(), Some(1));
    assert_eq!(Outcome::<i32>::failure(Error::domain("x")).ok(), None);
    assert_eq!(Outcome::success(1).err(), None);
    assert_eq!(Outcome::<i32>::failure(Error::domain("x")).err(), Some(Error::domain("x")));

    assert_eq!(Outcome::<i32>::failure(Error::domain("x")).value_or(7), 7);
    assert_eq!(Outcome::<usize>::failure(Error::domain("abc")).value_or_else(|e| e.detail().len()), 3);
}

#[test]
fn as_ref_keeps_original_intact() {
    let owned = Outcome::success(String::from("ada"));
    let borrowed = owned.as_ref().map(|name| name.len());
    assert_eq!(borrowed, Outcome::Success(3));
    assert_eq!(owned, Outcome::Success(String::from("ada")));
}

#[test]
fn iterates_over_success_value_only() {
    let ok = Outcome::success(5);
    assert_eq!(ok.iter().copied().collect::<Vec<_>>(), [5]);

    let failed: Outcome<i32> = Outcome::failure(Error::domain("x"));
    assert_eq!(failed.iter().count(), 0);
}

#[test]
fn equality_is_by_value() {
    let a: Outcome<i32> = Outcome::failure(Error::not_found("x").with_instance("/a"));
    let b: Outcome<i32> = Outcome::failure(Error::not_found("x").with_instance("/a"));
    let c: Outcome<i32> = Outcome::failure(Error::not_found("x").with_instance("/b"));
    assert_eq!(a, b);
    assert_ne!(a, c);
}
