use rop_rail::{AggregateError, Error, FieldError, Outcome, ValidationError};

#[test]
fn outcome_round_trips_through_json() {
    let ok = Outcome::success(42);
    let json = serde_json::to_string(&ok).unwrap();
    assert_eq!(json, r#"{"success":42}"#);
    assert_eq!(serde_json::from_str::<Outcome<i32>>(&json).unwrap(), ok);

    let failed: Outcome<i32> = Outcome::failure(
        Error::validation("Required", "email").combine(Error::not_found("user 7").with_instance("/users/7")),
    );
    let json = serde_json::to_string(&failed).unwrap();
    assert_eq!(serde_json::from_str::<Outcome<i32>>(&json).unwrap(), failed);
}

#[test]
fn error_is_tagged_by_kind() {
    let value = serde_json::to_value(Error::conflict("taken")).unwrap();
    assert_eq!(value["kind"], "conflict");
    assert_eq!(value["error"]["detail"], "taken");
    assert_eq!(value["error"]["code"], "conflict.error");
}

#[test]
fn field_error_without_details_is_rejected() {
    let result = serde_json::from_str::<FieldError>(r#"{"field_name":"email","details":[]}"#);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("at least one detail"), "{message}");
}

#[test]
fn field_error_details_are_deduplicated() {
    let field: FieldError =
        serde_json::from_str(r#"{"field_name":"email","details":["Required","Required","Invalid"]}"#).unwrap();
    assert_eq!(field.details(), ["Required", "Invalid"]);
}

#[test]
fn validation_error_without_fields_is_rejected() {
    let json = r#"{"field_errors":[],"detail":"Invalid","code":"validation.error","instance":null}"#;
    assert!(serde_json::from_str::<ValidationError>(json).is_err());
}

#[test]
fn validation_error_folds_repeated_fields() {
    let json = r#"{
        "field_errors": [
            {"field_name":"email","details":["Required"]},
            {"field_name":"email","details":["Invalid"]}
        ],
        "detail": "Invalid input",
        "code": "signup.invalid",
        "instance": "/signup"
    }"#;
    let error: ValidationError = serde_json::from_str(json).unwrap();

    assert_eq!(error.field_errors().len(), 1);
    assert_eq!(error.field("email").unwrap().details(), ["Required", "Invalid"]);
    assert_eq!(error.code(), "signup.invalid");
    assert_eq!(error.instance(), Some("/signup"));
}

#[test]
fn aggregate_with_fewer_than_two_errors_is_rejected() {
    let empty = r#"{"kind":"aggregate","error":{"errors":[],"detail":"Aggregated error","code":"aggregate.error","instance":null}}"#;
    assert!(serde_json::from_str::<Error>(empty).is_err());

    let single = r#"{"errors":[{"kind":"domain","error":{"detail":"closed","code":"domain.error","instance":null}}],
        "detail":"Aggregated error","code":"aggregate.error","instance":null}"#;
    assert!(serde_json::from_str::<AggregateError>(single).is_err());
}

#[test]
fn aggregate_of_mergeable_validations_is_rejected() {
    let json = r#"{"errors":[
            {"kind":"validation","error":{"field_errors":[{"field_name":"a","details":["x"]}],"detail":"x","code":"validation.error","instance":null}},
            {"kind":"validation","error":{"field_errors":[{"field_name":"b","details":["y"]}],"detail":"y","code":"validation.error","instance":null}}
        ],
        "detail":"Aggregated error","code":"aggregate.error","instance":null}"#;
    assert!(serde_json::from_str::<AggregateError>(json).is_err());
}

#[test]
fn nested_aggregate_with_empty_inner_list_is_rejected() {
    let json = r#"{"kind":"aggregate","error":{"errors":[
            {"kind":"not_found","error":{"detail":"gone","code":"not.found.error","instance":null}},
            {"kind":"aggregate","error":{"errors":[],"detail":"Aggregated error","code":"aggregate.error","instance":null}}
        ],
        "detail":"Aggregated error","code":"aggregate.error","instance":null}}"#;
    assert!(serde_json::from_str::<Error>(json).is_err());
}

#[test]
fn nested_aggregate_is_flattened_and_combines_cleanly() {
    let inner = Error::not_found("gone").combine(Error::conflict("locked"));
    let inner_json = serde_json::to_string(&inner).unwrap();
    let json = format!(
        r#"{{"kind":"aggregate","error":{{"errors":[{inner_json},{{"kind":"domain","error":{{"detail":"closed","code":"domain.error","instance":null}}}}],
        "detail":"Aggregated error","code":"aggregate.error","instance":"/orders/1"}}}}"#
    );

    let error: Error = serde_json::from_str(&json).unwrap();
    let aggregate = error.as_aggregate().unwrap();
    assert_eq!(aggregate.len(), 3);
    assert!(aggregate.iter().all(|atom| !atom.is_aggregate()));
    assert_eq!(aggregate.instance(), Some("/orders/1"));

    let combined = error.combine(Error::validation("Required", "email"));
    assert_eq!(combined.as_aggregate().unwrap().len(), 4);
}
