use crate::outcome::Outcome;
use crate::types::error::Error;
use crate::types::ErrorVec;

/// Collects the errors of several independent outcomes in input order.
///
/// This is the single primitive behind every `combine` arity and behind
/// collecting an iterator of outcomes: values are handed back as they are
/// taken, errors are kept, and [`into_error`](Self::into_error) folds them
/// left to right with [`Error::combine`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorAccumulator {
    errors: ErrorVec<Error>,
}

impl ErrorAccumulator {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorVec::new() }
    }

    /// Records a single error.
    #[inline]
    pub fn push(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Records every error yielded by `iter`.
    #[inline]
    pub fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }

    /// Returns the success value of `outcome`, recording its error otherwise.
    #[inline]
    pub fn take<T>(&mut self, outcome: Outcome<T>) -> Option<T> {
        match outcome {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(error) => {
                self.errors.push(error);
                None
            },
        }
    }

    /// Returns true if no error has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns an iterator over the recorded errors.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Folds the recorded errors into one, or `None` if nothing failed.
    pub fn into_error(self) -> Option<Error> {
        self.errors.into_iter().reduce(Error::combine)
    }

    /// Finishes with `value()` when nothing failed, or with the combined error.
    #[inline]
    pub fn finish<T, F>(self, value: F) -> Outcome<T>
    where
        F: FnOnce() -> T,
    {
        match self.into_error() {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(value()),
        }
    }
}

impl FromIterator<Error> for ErrorAccumulator {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self { errors: iter.into_iter().collect() }
    }
}

impl IntoIterator for ErrorAccumulator {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
