//! Registration Form Pattern
//!
//! Validating several independent fields at once and rendering every
//! failure as a problem-details style response.

use rop_rail::prelude::*;
use rop_rail::value_object::RequiredText;

constraint!(EmailRule: String, "email", "Email is invalid", |value| value.contains('@'));
type Email = ValueObject<EmailRule>;

#[derive(Debug)]
struct User {
    first_name: RequiredText,
    last_name: RequiredText,
    email: Email,
}

fn register(first_name: &str, last_name: &str, email: &str, taken: &[&str]) -> Outcome<User> {
    combine!(
        RequiredText::try_create_for(first_name.to_string(), "firstName"),
        RequiredText::try_create_for(last_name.to_string(), "lastName"),
        Email::try_create(email.to_string()),
    )
    .map(|(first_name, last_name, email)| User { first_name, last_name, email })
    .ensure_with(
        |user| !taken.contains(&user.email.as_str()),
        |user| Error::conflict(format!("{} is already registered", *user.email)).with_code("user.exists"),
    )
}

// Map error to HTTP status code
fn status_code(error: &Error) -> u16 {
    match error.kind() {
        ErrorKind::Validation | ErrorKind::BadRequest => 400,
        ErrorKind::Unauthorized => 401,
        ErrorKind::Forbidden => 403,
        ErrorKind::NotFound => 404,
        ErrorKind::Conflict => 409,
        ErrorKind::Domain => 422,
        ErrorKind::RateLimit => 429,
        ErrorKind::ServiceUnavailable => 503,
        ErrorKind::Unexpected | ErrorKind::Aggregate => 500,
    }
}

fn render(outcome: Outcome<User>) -> String {
    outcome.match_with(
        |user| format!("201 Created: {} {} <{}>", user.first_name, user.last_name, user.email),
        |error| {
            let mut body = format!("{} {}: {}", status_code(&error), error.code(), error.detail());
            if let Some(validation) = error.as_validation() {
                for (field, messages) in validation.to_dictionary() {
                    body.push_str(&format!("\n  {field}: {}", messages.join(", ")));
                }
            }
            body
        },
    )
}

fn main() {
    let taken = ["grace@example.com"];

    println!("{}", render(register("Ada", "Lovelace", "ada@example.com", &taken)));
    println!("{}", render(register("Ada", "  ", "ada.example.com", &taken)));
    println!("{}", render(register("Grace", "Hopper", "grace@example.com", &taken)));
}
