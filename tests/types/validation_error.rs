use rop_rail::{FieldError, ValidationError};

#[test]
fn single_field_constructor() {
    let error = ValidationError::new("Required", "email");

    assert_eq!(error.detail(), "Required");
    assert_eq!(error.code(), "validation.error");
    assert_eq!(error.instance(), None);
    assert_eq!(error.field_errors(), [FieldError::single("email", "Required")]);
}

#[test]
fn field_error_deduplicates_details() {
    let field = FieldError::new("password", ["Too short", "No digit", "Too short"]);
    assert_eq!(field.field_name(), "password");
    assert_eq!(field.details(), ["Too short", "No digit"]);
}

#[test]
#[should_panic(expected = "field error for 'email' must carry at least one detail")]
fn field_error_without_details_panics() {
    let _ = FieldError::new("email", Vec::<String>::new());
}

#[test]
fn field_error_try_new_reports_unexpected() {
    let error = FieldError::try_new("email", Vec::<String>::new()).unwrap_err();
    assert!(error.is_unexpected());
    assert!(FieldError::try_new("email", ["Required"]).is_ok());
}

#[test]
#[should_panic(expected = "validation error must carry at least one field error")]
fn validation_without_fields_panics() {
    let _ = ValidationError::from_field_errors(Vec::new(), "Invalid input");
}

#[test]
fn from_field_errors_folds_repeated_names() {
    let error = ValidationError::from_field_errors(
        [
            FieldError::single("email", "Required"),
            FieldError::single("name", "Required"),
            FieldError::new("email", ["Required", "Invalid"]),
        ],
        "Invalid input",
    );

    assert_eq!(error.detail(), "Invalid input");
    assert_eq!(error.field_errors().len(), 2);
    assert_eq!(error.field("email").unwrap().details(), ["Required", "Invalid"]);
    assert!(ValidationError::try_from_field_errors(Vec::new(), "x").is_err());
}

#[test]
fn and_returns_a_new_error() {
    let base = ValidationError::new("Required", "email");
    let extended = base.clone().and("name", "Required").and_many("email", ["Invalid", "Required"]);

    assert_eq!(base.field_errors().len(), 1);
    assert_eq!(extended.field_errors().len(), 2);
    assert_eq!(extended.field("email").unwrap().details(), ["Required", "Invalid"]);
    assert_eq!(extended.detail(), "Required");
}

#[test]
fn merge_unions_fields_in_first_seen_order() {
    let left = ValidationError::new("Required", "email").and("name", "Too long");
    let right = ValidationError::new("Invalid", "phone").and("email", "Invalid").and("email", "Required");

    let merged = left.merge(&right);
    let names: Vec<_> = merged.field_errors().iter().map(FieldError::field_name).collect();
    assert_eq!(names, ["email", "name", "phone"]);
    assert_eq!(merged.field("email").unwrap().details(), ["Required", "Invalid"]);
}

#[test]
fn merge_joins_differing_codes_and_details() {
    let left = ValidationError::new("Required", "email").with_code("email.required");
    let right = ValidationError::new("Invalid", "phone").with_code("phone.invalid");

    let merged = left.merge(&right);
    assert_eq!(merged.code(), "email.required+phone.invalid");
    assert_eq!(merged.detail(), "Required | Invalid");
}

#[test]
fn merge_keeps_equal_codes_and_details() {
    let merged = ValidationError::new("Required", "email").merge(&ValidationError::new("Required", "name"));
    assert_eq!(merged.code(), "validation.error");
    assert_eq!(merged.detail(), "Required");
}

#[test]
fn merge_takes_first_present_instance() {
    let left = ValidationError::new("Required", "email");
    let right = ValidationError::new("Required", "name").with_instance("/signup");
    assert_eq!(left.merge(&right).instance(), Some("/signup"));

    let left = left.with_instance("/register");
    assert_eq!(left.merge(&right).instance(), Some("/register"));
}

#[test]
fn merge_with_self_or_nothing_is_identity() {
    let error = ValidationError::new("Required", "email").and("email", "Invalid");
    assert_eq!(error.merge(&error), error);
    assert_eq!(error.merge_option(None), error);
}

#[test]
fn merge_drops_duplicate_messages() {
    let left = ValidationError::new("Required", "email");
    let merged = left.merge(&left.clone());
    assert_eq!(merged.field("email").unwrap().details(), ["Required"]);
}

#[test]
fn to_dictionary_maps_fields_to_messages() {
    let error = ValidationError::new("Required", "email").and("email", "Invalid").and("name", "Required");
    let dictionary = error.to_dictionary();

    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary["email"], ["Required", "Invalid"]);
    assert_eq!(dictionary["name"], ["Required"]);
}

#[test]
fn field_error_converts_into_validation() {
    let error: ValidationError = FieldError::new("email", ["Required", "Invalid"]).into();
    assert_eq!(error.detail(), "Required | Invalid");
    assert_eq!(error.field_errors().len(), 1);
}
