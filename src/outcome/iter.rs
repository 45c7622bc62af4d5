use crate::outcome::core::Outcome;
use crate::types::accumulator::ErrorAccumulator;

/// Collects outcomes into a single outcome of a collection.
///
/// Every item is inspected: success values are gathered into `C`, and when
/// any item failed the result is the combined error of all failed items in
/// iteration order.
///
/// # Examples
///
/// ```
/// use rop_rail::{Error, Outcome};
///
/// let outcomes = vec![
///     Outcome::success(1),
///     Outcome::failure(Error::validation("Required", "a")),
///     Outcome::failure(Error::validation("Required", "b")),
/// ];
/// let collected: Outcome<Vec<i32>> = outcomes.into_iter().collect();
///
/// let fields = collected.error().as_validation().unwrap().field_errors().len();
/// assert_eq!(fields, 2);
/// ```
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut errors = ErrorAccumulator::new();
        let values: C = iter.into_iter().filter_map(|outcome| errors.take(outcome)).collect();

        match errors.into_error() {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(values),
        }
    }
}
