//! Declarative shortcuts for combining outcomes and declaring value-object
//! constraints.
//!
//! - [`macro@crate::combine`] - joins 2 to 9 independent outcomes into an
//!   outcome of a tuple, collecting every failure.
//! - [`macro@crate::constraint`] - declares a [`Constraint`](crate::value_object::Constraint)
//!   for use with [`ValueObject`](crate::value_object::ValueObject).
//!
//! # Examples
//!
//! ```
//! use rop_rail::{combine, Error, Outcome};
//!
//! let result = combine!(
//!     Outcome::success(1),
//!     Outcome::success("two"),
//!     Outcome::<f64>::failure(Error::validation("Required", "three")),
//! );
//! assert!(result.is_failure());
//! ```

/// Joins independent outcomes into an [`Outcome`](crate::Outcome) of a tuple.
///
/// Expands to [`Combine::combine`](crate::Combine::combine) on the tuple of
/// arguments, so all 2 to 9 arities share one aggregation rule: when any
/// operand failed, the result holds the combined error of every failed
/// operand in argument order.
///
/// # Examples
///
/// ```
/// use rop_rail::{combine, Outcome};
///
/// let point = combine!(Outcome::success(1), Outcome::success(2), Outcome::success(3));
/// assert_eq!(point, Outcome::Success((1, 2, 3)));
/// ```
#[macro_export]
macro_rules! combine {
    ($($outcome:expr),+ $(,)?) => {
        $crate::Combine::combine(($($outcome,)+))
    };
}

/// Declares a zero-sized [`Constraint`](crate::value_object::Constraint).
///
/// # Syntax
///
/// `constraint!(Vis Name: RawType, "fieldName", "message", |value| check);`
///
/// The check receives `&RawType` and returns `bool`.
///
/// # Examples
///
/// ```
/// use rop_rail::{constraint, value_object::ValueObject};
///
/// constraint!(pub Positive: i64, "amount", "Amount must be positive", |v| *v > 0);
/// type Amount = ValueObject<Positive>;
///
/// assert!(Amount::try_create(5).is_success());
/// assert!(Amount::try_create(-5).is_failure());
/// ```
#[macro_export]
macro_rules! constraint {
    ($vis:vis $name:ident : $raw:ty, $field:literal, $message:literal, |$value:ident| $check:expr $(;)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::value_object::Constraint for $name {
            type Raw = $raw;
            const FIELD_NAME: &'static str = $field;
            const MESSAGE: &'static str = $message;

            fn is_valid($value: &Self::Raw) -> bool {
                $check
            }
        }
    };
}
