//! Combining independent outcomes into tuples.
//!
//! Unlike [`bind`](Outcome::bind), combining does not stop at the first
//! failure: the error of every failed operand is collected in operand order
//! and folded with [`Error::combine`](crate::Error::combine), so several
//! validation failures surface together.
//!
//! Three shapes share that rule:
//!
//! - [`Outcome::combine`] pairs two outcomes
//! - [`Outcome::and_combine`] appends one more outcome to a tuple outcome
//! - [`Combine::combine`] (and the [`combine!`](crate::combine) macro) joins a
//!   tuple of 2 to 9 outcomes in one step
//!
//! # Examples
//!
//! ```
//! use rop_rail::{Combine, Error, Outcome};
//!
//! let first = Outcome::success("Ada");
//! let last: Outcome<&str> = Outcome::failure(Error::validation("Required", "lastName"));
//! let email: Outcome<&str> = Outcome::failure(Error::validation("Invalid", "email"));
//!
//! let combined = (first, last, email).combine();
//! let fields = combined.error().as_validation().unwrap().to_dictionary();
//! assert_eq!(fields.len(), 2);
//! ```

use alloc::vec::Vec;

use crate::outcome::core::Outcome;
use crate::types::accumulator::ErrorAccumulator;

impl<T> Outcome<T> {
    /// Pairs two independent outcomes, collecting both errors when both fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, Outcome};
    ///
    /// let pair = Outcome::success(1).combine(Outcome::success("one"));
    /// assert_eq!(pair, Outcome::Success((1, "one")));
    ///
    /// let failed = Outcome::<i32>::failure(Error::validation("Required", "a"))
    ///     .combine(Outcome::<i32>::failure(Error::validation("Required", "b")));
    /// assert_eq!(failed.error().as_validation().unwrap().field_errors().len(), 2);
    /// ```
    #[inline]
    pub fn combine<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Outcome::Success(left), Outcome::Success(right)) => Outcome::Success((left, right)),
            (Outcome::Failure(error), Outcome::Success(_))
            | (Outcome::Success(_), Outcome::Failure(error)) => Outcome::Failure(error),
            (Outcome::Failure(left), Outcome::Failure(right)) => {
                Outcome::Failure(left.combine(right))
            },
        }
    }

    /// Appends one more independent outcome to a tuple outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// let triple = Outcome::success(1)
    ///     .combine(Outcome::success('b'))
    ///     .and_combine(Outcome::success("c"));
    /// assert_eq!(triple, Outcome::Success((1, 'b', "c")));
    /// ```
    #[inline]
    pub fn and_combine<U>(self, other: Outcome<U>) -> Outcome<T::Output>
    where
        T: TupleAppend<U>,
    {
        self.combine(other).map(|(tuple, last)| tuple.append(last))
    }

    /// Collects every success value, or the combined error of every failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{Error, Outcome};
    ///
    /// let all = Outcome::combine_all([Outcome::success(1), Outcome::success(2)]);
    /// assert_eq!(all, Outcome::Success(vec![1, 2]));
    ///
    /// let some = Outcome::combine_all([
    ///     Outcome::success(1),
    ///     Outcome::failure(Error::not_found("two")),
    ///     Outcome::failure(Error::conflict("three")),
    /// ]);
    /// assert_eq!(some.error().as_aggregate().unwrap().len(), 2);
    /// ```
    pub fn combine_all<I>(outcomes: I) -> Outcome<Vec<T>>
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        outcomes.into_iter().collect()
    }
}

/// Appends a value to the end of a tuple.
pub trait TupleAppend<U> {
    /// The tuple one element longer.
    type Output;

    /// Returns the tuple with `value` appended.
    fn append(self, value: U) -> Self::Output;
}

/// Joins a tuple of independent outcomes into an outcome of a tuple.
///
/// Implemented for tuples of 2 to 9 outcomes.
pub trait Combine {
    /// The tuple of success values.
    type Output;

    /// Succeeds with every value when all operands succeed, otherwise fails
    /// with the combined error of every failed operand, in operand order.
    fn combine(self) -> Outcome<Self::Output>;
}

macro_rules! impl_tuple_append {
    ($($T:ident $v:ident),+) => {
        impl<$($T,)+ U> TupleAppend<U> for ($($T,)+) {
            type Output = ($($T,)+ U,);

            #[inline]
            fn append(self, value: U) -> Self::Output {
                let ($($v,)+) = self;
                ($($v,)+ value,)
            }
        }
    };
}

impl_tuple_append!(T1 a, T2 b);
impl_tuple_append!(T1 a, T2 b, T3 c);
impl_tuple_append!(T1 a, T2 b, T3 c, T4 d);
impl_tuple_append!(T1 a, T2 b, T3 c, T4 d, T5 e);
impl_tuple_append!(T1 a, T2 b, T3 c, T4 d, T5 e, T6 f);
impl_tuple_append!(T1 a, T2 b, T3 c, T4 d, T5 e, T6 f, T7 g);
impl_tuple_append!(T1 a, T2 b, T3 c, T4 d, T5 e, T6 f, T7 g, T8 h);

macro_rules! impl_combine {
    ($($T:ident $o:ident),+) => {
        impl<$($T),+> Combine for ($(Outcome<$T>,)+) {
            type Output = ($($T,)+);

            fn combine(self) -> Outcome<Self::Output> {
                let ($($o,)+) = self;
                let mut errors = ErrorAccumulator::new();
                $(let $o = errors.take($o);)+

                match (errors.into_error(), ($($o,)+)) {
                    (Some(error), _) => Outcome::Failure(error),
                    (None, ($(Some($o),)+)) => Outcome::Success(($($o,)+)),
                    (None, _) => unreachable!("every missing value records an error"),
                }
            }
        }
    };
}

impl_combine!(T1 a, T2 b);
impl_combine!(T1 a, T2 b, T3 c);
impl_combine!(T1 a, T2 b, T3 c, T4 d);
impl_combine!(T1 a, T2 b, T3 c, T4 d, T5 e);
impl_combine!(T1 a, T2 b, T3 c, T4 d, T5 e, T6 f);
impl_combine!(T1 a, T2 b, T3 c, T4 d, T5 e, T6 f, T7 g);
impl_combine!(T1 a, T2 b, T3 c, T4 d, T5 e, T6 f, T7 g, T8 h);
impl_combine!(T1 a, T2 b, T3 c, T4 d, T5 e, T6 f, T7 g, T8 h, T9 i);
