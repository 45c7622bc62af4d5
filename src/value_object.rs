//! Validated wrappers around primitive values.
//!
//! A [`ValueObject<C>`] can only be obtained through
//! [`ValueObject::try_create`], which runs the [`Constraint`] `C` on the raw
//! value and reports a field-level validation failure otherwise. One generic
//! type covers every constrained primitive; a new kind of value is a new
//! zero-sized constraint, usually declared with [`constraint!`](crate::constraint).
//!
//! # Examples
//!
//! ```
//! use rop_rail::value_object::{RequiredText, ValueObject};
//! use rop_rail::{combine, constraint, Outcome};
//!
//! constraint!(pub EmailRule: String, "email", "Email is invalid", |v| v.contains('@'));
//! type Email = ValueObject<EmailRule>;
//!
//! let registration = combine!(
//!     RequiredText::try_create_for("  ".to_string(), "firstName"),
//!     Email::try_create("ada.example.com".to_string()),
//! );
//!
//! let fields = registration.error().as_validation().unwrap().to_dictionary();
//! assert!(fields.contains_key("firstName"));
//! assert!(fields.contains_key("email"));
//! ```

use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Deref;

use crate::outcome::Outcome;
use crate::types::error::Error;

/// Validation rule for a [`ValueObject`].
pub trait Constraint {
    /// The wrapped primitive.
    type Raw;

    /// Field name reported when validation fails.
    const FIELD_NAME: &'static str;

    /// Message reported when validation fails.
    const MESSAGE: &'static str;

    /// Returns `true` when `raw` satisfies the rule.
    fn is_valid(raw: &Self::Raw) -> bool;

    /// Canonicalizes the raw value before it is checked. Identity by default.
    #[inline]
    fn normalize(raw: Self::Raw) -> Self::Raw {
        raw
    }
}

/// A primitive value known to satisfy the constraint `C`.
pub struct ValueObject<C: Constraint> {
    value: C::Raw,
    marker: PhantomData<fn() -> C>,
}

impl<C: Constraint> ValueObject<C> {
    /// Validates `raw`, failing with a validation error on [`Constraint::FIELD_NAME`].
    pub fn try_create(raw: C::Raw) -> Outcome<Self> {
        Self::try_create_for(raw, C::FIELD_NAME)
    }

    /// Validates `raw`, reporting failures against `field_name` instead of the
    /// constraint's default field.
    pub fn try_create_for(raw: C::Raw, field_name: &str) -> Outcome<Self> {
        Outcome::success(C::normalize(raw))
            .ensure_with(C::is_valid, |_| Error::validation(C::MESSAGE, field_name))
            .map(|value| Self { value, marker: PhantomData })
    }

    /// Borrows the validated value.
    #[inline]
    pub fn value(&self) -> &C::Raw {
        &self.value
    }

    /// Consumes the wrapper, returning the validated value.
    #[inline]
    pub fn into_inner(self) -> C::Raw {
        self.value
    }
}

impl<C: Constraint> Deref for ValueObject<C> {
    type Target = C::Raw;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<C: Constraint> AsRef<C::Raw> for ValueObject<C> {
    fn as_ref(&self) -> &C::Raw {
        &self.value
    }
}

impl<C> Clone for ValueObject<C>
where
    C: Constraint,
    C::Raw: Clone,
{
    fn clone(&self) -> Self {
        Self { value: self.value.clone(), marker: PhantomData }
    }
}

impl<C> PartialEq for ValueObject<C>
where
    C: Constraint,
    C::Raw: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C> Eq for ValueObject<C>
where
    C: Constraint,
    C::Raw: Eq,
{
}

impl<C> Hash for ValueObject<C>
where
    C: Constraint,
    C::Raw: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<C> fmt::Debug for ValueObject<C>
where
    C: Constraint,
    C::Raw: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueObject").field(&self.value).finish()
    }
}

impl<C> fmt::Display for ValueObject<C>
where
    C: Constraint,
    C::Raw: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(feature = "serde")]
impl<C> serde::Serialize for ValueObject<C>
where
    C: Constraint,
    C::Raw: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C> serde::Deserialize<'de> for ValueObject<C>
where
    C: Constraint,
    C::Raw: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let raw = <C::Raw as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Self::try_create(raw).into_result().map_err(D::Error::custom)
    }
}

/// Text that is not blank once trimmed. Surrounding whitespace is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NonEmptyText;

impl Constraint for NonEmptyText {
    type Raw = String;
    const FIELD_NAME: &'static str = "value";
    const MESSAGE: &'static str = "Value is required";

    fn is_valid(raw: &String) -> bool {
        !raw.is_empty()
    }

    fn normalize(raw: String) -> String {
        let trimmed = raw.trim();
        if trimmed.len() == raw.len() {
            raw
        } else {
            String::from(trimmed)
        }
    }
}

/// Required, trimmed text.
pub type RequiredText = ValueObject<NonEmptyText>;
