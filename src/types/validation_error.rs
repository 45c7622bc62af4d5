//! Field-level validation failures.
//!
//! [`ValidationError`] groups one or more [`FieldError`]s. Field names are
//! unique inside a validation error and every field keeps its messages in
//! first-seen order with exact duplicates dropped. Two validation errors can
//! be folded into one with [`ValidationError::merge`], which is how
//! [`Error::combine`](crate::Error::combine) keeps independent field
//! failures together.
//!
//! # Examples
//!
//! ```
//! use rop_rail::ValidationError;
//!
//! let err = ValidationError::new("Required", "email")
//!     .and("password", "Too short")
//!     .and("password", "Must contain a digit");
//!
//! assert_eq!(err.field_errors().len(), 2);
//! assert_eq!(err.field("password").unwrap().details().len(), 2);
//! ```

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::error::Error;
use crate::types::kinds::UnexpectedError;
use crate::types::ErrorVec;

const CODE_SEPARATOR: &str = "+";
const DETAIL_SEPARATOR: &str = " | ";

/// Messages attached to a single named input field.
///
/// Always holds at least one message; duplicates are removed on insertion.
/// Deserialization goes through [`FieldError::try_new`].
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FieldErrorRepr"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldError {
    field_name: String,
    details: ErrorVec<String>,
}

impl FieldError {
    /// Creates a field error from one or more messages.
    ///
    /// # Panics
    ///
    /// Panics if `details` yields no message. An empty field error is a bug in
    /// the calling code, not a validation outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::FieldError;
    ///
    /// let field = FieldError::new("email", ["Required", "Required", "Invalid"]);
    /// assert_eq!(field.details(), ["Required", "Invalid"]);
    /// ```
    #[track_caller]
    pub fn new<I, S>(field_name: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match Self::try_new(field_name, details) {
            Ok(field) => field,
            Err(error) => panic!("{}", error.detail()),
        }
    }

    /// Fallible form of [`FieldError::new`].
    pub fn try_new<I, S>(field_name: impl Into<String>, details: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut field = Self { field_name: field_name.into(), details: ErrorVec::new() };
        for detail in details {
            field.push_detail(detail.into());
        }

        if field.details.is_empty() {
            return Err(UnexpectedError::new(format!(
                "field error for '{}' must carry at least one detail",
                field.field_name
            ))
            .into());
        }
        Ok(field)
    }

    /// Creates a field error holding a single message.
    #[inline]
    pub fn single(field_name: impl Into<String>, detail: impl Into<String>) -> Self {
        let mut details = ErrorVec::new();
        details.push(detail.into());
        Self { field_name: field_name.into(), details }
    }

    #[inline]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Messages in first-seen order.
    #[inline]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    fn push_detail(&mut self, detail: String) {
        if !self.details.contains(&detail) {
            self.details.push(detail);
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_name, self.details.join(", "))
    }
}

/// One or more input fields failed validation.
///
/// Deserialization rejects an empty field list and folds repeated field names
/// the same way [`ValidationError::try_from_field_errors`] does.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ValidationErrorRepr"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    field_errors: ErrorVec<FieldError>,
    detail: String,
    code: String,
    instance: Option<String>,
}

impl ValidationError {
    /// Code used when none is supplied.
    pub const DEFAULT_CODE: &'static str = "validation.error";

    /// Creates a validation error for a single field.
    ///
    /// The field message doubles as the error's human-readable detail.
    pub fn new(field_detail: impl Into<String>, field_name: impl Into<String>) -> Self {
        let field_detail = field_detail.into();
        let mut field_errors = ErrorVec::new();
        field_errors.push(FieldError::single(field_name, field_detail.clone()));
        Self {
            field_errors,
            detail: field_detail,
            code: String::from(Self::DEFAULT_CODE),
            instance: None,
        }
    }

    /// Creates a validation error from several field errors.
    ///
    /// Entries sharing a field name are folded together in encounter order.
    ///
    /// # Panics
    ///
    /// Panics if `field_errors` is empty.
    #[track_caller]
    pub fn from_field_errors<I>(field_errors: I, detail: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = FieldError>,
    {
        match Self::try_from_field_errors(field_errors, detail) {
            Ok(error) => error,
            Err(error) => panic!("{}", error.detail()),
        }
    }

    /// Fallible form of [`ValidationError::from_field_errors`].
    pub fn try_from_field_errors<I>(field_errors: I, detail: impl Into<String>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = FieldError>,
    {
        let mut folded: ErrorVec<FieldError> = ErrorVec::new();
        for field in field_errors {
            fold_field(&mut folded, field.field_name, field.details);
        }

        if folded.is_empty() {
            return Err(UnexpectedError::new(
                "validation error must carry at least one field error",
            )
            .into());
        }

        Ok(Self {
            field_errors: folded,
            detail: detail.into(),
            code: String::from(Self::DEFAULT_CODE),
            instance: None,
        })
    }

    /// Returns a new error with `message` recorded against `field_name`.
    #[must_use = "`and` returns a new ValidationError and consumes the receiver"]
    pub fn and(self, field_name: impl Into<String>, message: impl Into<String>) -> Self {
        self.and_many(field_name, [message])
    }

    /// Returns a new error with every message recorded against `field_name`.
    ///
    /// # Panics
    ///
    /// Panics if `messages` is empty.
    #[must_use = "`and_many` returns a new ValidationError and consumes the receiver"]
    #[track_caller]
    pub fn and_many<I, S>(mut self, field_name: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field = FieldError::new(field_name, messages);
        fold_field(&mut self.field_errors, field.field_name, field.details);
        self
    }

    /// Replaces the machine-readable code.
    #[inline]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Replaces the human-readable detail.
    #[inline]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Sets the identifier of the failing resource or request.
    #[inline]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Field errors in first-seen order, one entry per field name.
    #[inline]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Looks up the messages recorded for `field_name`.
    pub fn field(&self, field_name: &str) -> Option<&FieldError> {
        self.field_errors.iter().find(|field| field.field_name == field_name)
    }

    /// Merges two validation errors into a new one.
    ///
    /// - fields are unioned by name, fields of `self` first
    /// - messages are unioned per field, exact duplicates dropped
    /// - differing codes are joined with `+`, differing details with `" | "`
    /// - the instance is the first one present
    ///
    /// Merging an error with itself returns an identical copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::ValidationError;
    ///
    /// let email = ValidationError::new("Required", "email");
    /// let password = ValidationError::new("Required", "password");
    /// let merged = email.merge(&password);
    ///
    /// let names: Vec<_> = merged.field_errors().iter().map(|f| f.field_name()).collect();
    /// assert_eq!(names, ["email", "password"]);
    /// assert_eq!(merged.detail(), "Required");
    /// ```
    pub fn merge(&self, other: &ValidationError) -> ValidationError {
        if core::ptr::eq(self, other) {
            return self.clone();
        }

        let mut field_errors: ErrorVec<FieldError> = ErrorVec::new();
        for field in self.field_errors.iter().chain(other.field_errors.iter()) {
            fold_field(&mut field_errors, field.field_name.clone(), field.details.iter().cloned());
        }

        ValidationError {
            field_errors,
            detail: join_distinct(&self.detail, &other.detail, DETAIL_SEPARATOR),
            code: join_distinct(&self.code, &other.code, CODE_SEPARATOR),
            instance: self.instance.clone().or_else(|| other.instance.clone()),
        }
    }

    /// [`merge`](Self::merge) with an optional right-hand side; `None` yields a copy of `self`.
    pub fn merge_option(&self, other: Option<&ValidationError>) -> ValidationError {
        match other {
            Some(other) => self.merge(other),
            None => self.clone(),
        }
    }

    /// Field name to messages, the shape consumed by problem-details renderers.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::ValidationError;
    ///
    /// let err = ValidationError::new("Required", "email").and("email", "Invalid");
    /// let map = err.to_dictionary();
    /// assert_eq!(map["email"], ["Required", "Invalid"]);
    /// ```
    pub fn to_dictionary(&self) -> BTreeMap<String, Vec<String>> {
        self.field_errors
            .iter()
            .map(|field| (field.field_name.clone(), field.details.to_vec()))
            .collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.detail)?;
        if let Some(instance) = &self.instance {
            write!(f, " (instance: {})", instance)?;
        }
        f.write_str(" [")?;
        for (index, field) in self.field_errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", field)?;
        }
        f.write_str("]")
    }
}

impl From<ValidationError> for Error {
    #[inline]
    fn from(error: ValidationError) -> Self {
        Error::Validation(error)
    }
}

impl From<FieldError> for ValidationError {
    fn from(field: FieldError) -> Self {
        let detail = field.details.join(DETAIL_SEPARATOR);
        let mut field_errors = ErrorVec::new();
        field_errors.push(field);
        Self { field_errors, detail, code: String::from(Self::DEFAULT_CODE), instance: None }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct FieldErrorRepr {
    field_name: String,
    details: Vec<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<FieldErrorRepr> for FieldError {
    type Error = Error;

    fn try_from(repr: FieldErrorRepr) -> Result<Self, Self::Error> {
        FieldError::try_new(repr.field_name, repr.details)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ValidationErrorRepr {
    field_errors: Vec<FieldError>,
    detail: String,
    code: String,
    #[serde(default)]
    instance: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<ValidationErrorRepr> for ValidationError {
    type Error = Error;

    fn try_from(repr: ValidationErrorRepr) -> Result<Self, Self::Error> {
        let mut error = ValidationError::try_from_field_errors(repr.field_errors, repr.detail)?;
        error.code = repr.code;
        error.instance = repr.instance;
        Ok(error)
    }
}

fn fold_field<I>(fields: &mut ErrorVec<FieldError>, field_name: String, details: I)
where
    I: IntoIterator<Item = String>,
{
    let index = match fields.iter().position(|field| field.field_name == field_name) {
        Some(index) => index,
        None => {
            fields.push(FieldError { field_name, details: ErrorVec::new() });
            fields.len() - 1
        },
    };

    for detail in details {
        fields[index].push_detail(detail);
    }
}

/// Joins two separator-delimited labels, keeping each segment once.
///
/// Equal inputs stay as they are and distinct ones are concatenated, and
/// regrouping a chain of joins yields the same label.
fn join_distinct(left: &str, right: &str, separator: &str) -> String {
    if left == right {
        return String::from(left);
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in left.split(separator).chain(right.split(separator)) {
        if !segments.contains(&segment) {
            segments.push(segment);
        }
    }
    segments.join(separator)
}
