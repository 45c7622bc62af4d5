//! Heterogeneous failures collected by [`Error::combine`](crate::Error::combine).

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::error::Error;
#[cfg(feature = "serde")]
use crate::types::kinds::UnexpectedError;

/// Two or more independent failures that could not be merged field-wise.
///
/// The list is always flat: it never contains another `AggregateError`, and
/// every validation failure it holds is folded into a single
/// [`ValidationError`](crate::ValidationError) entry placed where the first
/// one was encountered. Deserialized aggregates are normalized the same way
/// and rejected when fewer than two errors remain.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AggregateErrorRepr"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateError {
    errors: Vec<Error>,
    detail: String,
    code: String,
    instance: Option<String>,
}

impl AggregateError {
    /// Code used when none is supplied.
    pub const DEFAULT_CODE: &'static str = "aggregate.error";
    /// Detail used when none is supplied.
    pub const DEFAULT_DETAIL: &'static str = "Aggregated error";

    /// Builds an aggregate from already normalized atoms.
    pub(crate) fn from_atoms(errors: Vec<Error>) -> Self {
        debug_assert!(errors.len() >= 2, "aggregate built from fewer than two errors");
        debug_assert!(!errors.iter().any(Error::is_aggregate), "aggregate must be flat");
        Self {
            errors,
            detail: String::from(Self::DEFAULT_DETAIL),
            code: String::from(Self::DEFAULT_CODE),
            instance: None,
        }
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

    /// The collected errors in the order they were combined.
    #[inline]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Consumes the aggregate, returning its inner errors.
    #[inline]
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for AggregateError {
    type Item = Error;
    type IntoIter = alloc::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.detail)?;
        if let Some(instance) = &self.instance {
            write!(f, " (instance: {})", instance)?;
        }
        if f.alternate() {
            for error in &self.errors {
                write!(f, "\n  - {}", error)?;
            }
            Ok(())
        } else {
            write!(f, " ({} errors)", self.errors.len())
        }
    }
}

impl From<AggregateError> for Error {
    #[inline]
    fn from(error: AggregateError) -> Self {
        Error::Aggregate(error)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct AggregateErrorRepr {
    errors: Vec<Error>,
    detail: String,
    code: String,
    #[serde(default)]
    instance: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<AggregateErrorRepr> for AggregateError {
    type Error = Error;

    fn try_from(repr: AggregateErrorRepr) -> Result<Self, Self::Error> {
        let mut atoms = Vec::with_capacity(repr.errors.len());
        for error in repr.errors {
            error.push_atoms(&mut atoms);
        }

        if atoms.len() < 2 {
            return Err(UnexpectedError::new(
                "aggregate error must hold at least two errors that cannot be merged",
            )
            .into());
        }

        Ok(Self { errors: atoms, detail: repr.detail, code: repr.code, instance: repr.instance })
    }
}
