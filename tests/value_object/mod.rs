use std::collections::HashSet;

use rop_rail::value_object::{NonEmptyText, RequiredText, ValueObject};
use rop_rail::{combine, constraint, Error, Outcome};

constraint!(EmailRule: String, "email", "Email is invalid", |value| value.contains('@'));
type Email = ValueObject<EmailRule>;

#[test]
fn required_text_trims_and_accepts() {
    let name = RequiredText::try_create("  Ada  ".to_string()).into_value();
    assert_eq!(name.value(), "Ada");
    assert_eq!(name.len(), 3);
    assert_eq!(name.to_string(), "Ada");
}

#[test]
fn required_text_rejects_blank_input() {
    let blank = RequiredText::try_create("   ".to_string());
    assert_eq!(blank.error(), &Error::validation("Value is required", "value"));
}

#[test]
fn field_name_can_be_overridden() {
    let blank = RequiredText::try_create_for(String::new(), "lastName");
    let dictionary = blank.error().as_validation().unwrap().to_dictionary();
    assert_eq!(dictionary["lastName"], ["Value is required"]);
}

#[test]
fn value_objects_compare_by_value() {
    let a = Email::try_create("ada@example.com".to_string()).into_value();
    let b = Email::try_create("ada@example.com".to_string()).into_value();
    assert_eq!(a, b);

    let set: HashSet<_> = [a.clone(), b].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert_eq!(a.into_inner(), "ada@example.com");
}

#[test]
fn value_objects_feed_combine() {
    let registration = combine!(
        RequiredText::try_create_for("Ada".to_string(), "firstName"),
        RequiredText::try_create_for(" ".to_string(), "lastName"),
        Email::try_create("ada.example.com".to_string()),
    );

    let dictionary = registration.error().as_validation().unwrap().to_dictionary();
    assert_eq!(dictionary.keys().collect::<Vec<_>>(), ["email", "lastName"]);
}

#[test]
fn non_empty_text_is_usable_directly() {
    let outcome: Outcome<ValueObject<NonEmptyText>> = ValueObject::try_create("x".to_string());
    assert!(outcome.is_success());
}

#[cfg(feature = "serde")]
#[test]
fn deserialization_validates() {
    let email: Email = serde_json::from_str(r#""ada@example.com""#).unwrap();
    assert_eq!(serde_json::to_string(&email).unwrap(), r#""ada@example.com""#);

    let invalid = serde_json::from_str::<Email>(r#""nope""#);
    assert!(invalid.unwrap_err().to_string().contains("Email is invalid"));
}
