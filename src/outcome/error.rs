use super::{Outcome, Tag};
use thiserror::Error;

/// Retrieval of a payload from the wrong variant.
///
/// Returned by [`Outcome::try_unwrap`] and [`Outcome::try_unwrap_err`]; the
/// panicking `unwrap` family reports the same condition by aborting instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnwrapError<T, E> {
    #[error("called unwrap on a Failure value: {0:?}")]
    UnwrapOnFailure(E),

    #[error("called unwrap_err on a Success value: {0:?}")]
    UnwrapOnSuccess(T),
}

impl<T, E> UnwrapError<T, E> {
    /// Hands back the payload that was found instead, as the `Outcome` it came from.
    pub fn into_outcome(self) -> Outcome<T, E> {
        match self {
            UnwrapError::UnwrapOnFailure(error) => Outcome::Failure(error),
            UnwrapError::UnwrapOnSuccess(value) => Outcome::Success(value),
        }
    }
}

/// A [`Outcome::rewrap`] replacement whose variant did not match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot rewrap a {expected} outcome with a {found} replacement")]
pub struct VariantMismatch<T, E> {
    pub expected: Tag,
    pub found: Tag,
    /// The replacement, returned untouched.
    pub rejected: Outcome<T, E>,
}
