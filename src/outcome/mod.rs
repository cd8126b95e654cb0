//! The `Outcome` type: a value that is either a `Success` or a `Failure`.
//!
//! `Outcome<T, E>` is a closed sum of exactly two variants. Code that holds an
//! `Outcome` branches on it with `match` (or [`Outcome::is_success`]) and the
//! compiler narrows the payload type inside each arm, so no cast is ever needed.
//!
//! Combinators come in two families:
//!
//! - **Success channel** ([`Outcome::map`], [`Outcome::try_map`],
//!   [`Outcome::and_then`]): act on a `Success`, pass a `Failure` through untouched.
//! - **Failure channel** ([`Outcome::map_err`], [`Outcome::try_map_err`],
//!   [`Outcome::or_else`]): act on a `Failure`, pass a `Success` through untouched.
//!   Only `or_else` can turn a `Failure` into a `Success`.
//!
//! # Example
//!
//! ```
//! use twotrack::outcome::{lift, Outcome};
//!
//! let doubled = lift(|| 10)
//!     .map_err(|fault| fault.to_string())
//!     .and_then(|x| if x > 0 { Outcome::Success(x * 2) } else { Outcome::Failure("neg".to_string()) })
//!     .map(|x| x.to_string());
//!
//! assert_eq!(doubled, Outcome::Success("20".to_string()));
//! ```

mod error;
mod lift;
mod monad;
mod structure;

pub use error::{UnwrapError, VariantMismatch};
pub use lift::{lift, lift_result, Fault};
pub use monad::Monad;
pub use structure::{join, JoinError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Either a successful value or an error value.
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T, E> {
    /// A completed, valid computation.
    Success(T),
    /// A failed computation carrying its error data.
    Failure(E),
}

/// The discriminant of an [`Outcome`], detached from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Success,
    Failure,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Success => write!(f, "Success"),
            Tag::Failure => write!(f, "Failure"),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` for a `Success`.
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub const fn tag(&self) -> Tag {
        match self {
            Outcome::Success(_) => Tag::Success,
            Outcome::Failure(_) => Tag::Failure,
        }
    }

    /// Converts into an `Option<T>`, discarding any error.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Converts into an `Option<E>`, discarding any value.
    pub fn failure(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Borrows the payload without giving up ownership of it.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `f` to a `Success` value. A `Failure` is returned as is.
    ///
    /// `f` is assumed not to fail. Use [`Outcome::try_map`] when it returns a
    /// `Result`, or [`Outcome::map_caught`] when it may panic.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a fallible `f` to a `Success` value.
    ///
    /// An `Err` returned by `f` is captured and converted into a `Failure`;
    /// it is never propagated past this call.
    ///
    /// ```
    /// use twotrack::outcome::Outcome;
    ///
    /// let parsed: Outcome<i32, std::num::ParseIntError> =
    ///     Outcome::Success("12x").try_map(|s| s.parse::<i32>());
    /// assert!(parsed.is_failure());
    /// ```
    pub fn try_map<U, X, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Result<U, X>,
        X: Into<E>,
    {
        match self {
            Outcome::Success(value) => match f(value) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(raised) => Outcome::Failure(raised.into()),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a computation that itself returns an `Outcome`.
    ///
    /// The result of `f` is returned directly, without double wrapping.
    /// Nothing raised by `f` is caught here.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns `other` if `self` is a `Success`, otherwise the `Failure`.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        self.and_then(|_| other)
    }

    /// Applies `g` to a `Failure` error. A `Success` is returned as is.
    ///
    /// The result is always a `Failure` when `self` is one: this combinator
    /// cannot recover. See [`Outcome::or_else`] for recovery.
    pub fn map_err<E2, G>(self, g: G) -> Outcome<T, E2>
    where
        G: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(g(error)),
        }
    }

    /// Applies a fallible `g` to a `Failure` error.
    ///
    /// Both arms of `g` produce a `Failure`: an `Err` from `g` replaces the
    /// error instead of the mapped one.
    pub fn try_map_err<E2, X, G>(self, g: G) -> Outcome<T, E2>
    where
        G: FnOnce(E) -> Result<E2, X>,
        X: Into<E2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => match g(error) {
                Ok(mapped) => Outcome::Failure(mapped),
                Err(raised) => Outcome::Failure(raised.into()),
            },
        }
    }

    /// Recovers from a `Failure` by running `h` on the error.
    ///
    /// Unlike [`Outcome::map_err`], `h` may return a `Success`. Nothing raised
    /// by `h` is caught here.
    pub fn or_else<E2, H>(self, h: H) -> Outcome<T, E2>
    where
        H: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => h(error),
        }
    }

    /// Returns `self` if it is a `Success`, otherwise `other`.
    pub fn or<E2>(self, other: Outcome<T, E2>) -> Outcome<T, E2> {
        self.or_else(|_| other)
    }

    /// Calls `f` with a reference to the `Success` value, then returns `self`.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the `Failure` error, then returns `self`.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(ref error) = self {
            f(error);
        }
        self
    }

    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(_) => default,
        }
    }

    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => default(error),
        }
    }

    /// Returns the `Success` value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is a `Failure`. Calling `unwrap` is a promise that the
    /// discriminant was already checked; use [`Outcome::try_unwrap`] otherwise.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                unwrap_failed("called `Outcome::unwrap()` on a `Failure` value", &error)
            }
        }
    }

    /// Returns the `Success` value, panicking with `msg` on a `Failure`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => unwrap_failed(msg, &error),
        }
    }

    /// Returns the `Failure` error.
    ///
    /// # Panics
    ///
    /// Panics if `self` is a `Success`.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => {
                unwrap_failed("called `Outcome::unwrap_err()` on a `Success` value", &value)
            }
            Outcome::Failure(error) => error,
        }
    }

    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => unwrap_failed(msg, &value),
            Outcome::Failure(error) => error,
        }
    }

    /// Non-panicking [`Outcome::unwrap`]: the wrong variant is reported as an
    /// [`UnwrapError::UnwrapOnFailure`] carrying the error.
    pub fn try_unwrap(self) -> Result<T, UnwrapError<T, E>> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(UnwrapError::UnwrapOnFailure(error)),
        }
    }

    pub fn try_unwrap_err(self) -> Result<E, UnwrapError<T, E>> {
        match self {
            Outcome::Success(value) => Err(UnwrapError::UnwrapOnSuccess(value)),
            Outcome::Failure(error) => Ok(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Converts into a `std::result::Result`, so `?` can be used at the
    /// boundary with code that does not know about `Outcome`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Replaces the payload in place, keeping the variant.
    ///
    /// `replacement` must have the same variant as `self`. On success the
    /// previous instance is returned. On a variant mismatch `self` is left
    /// untouched and the rejected replacement is handed back in the error.
    ///
    /// This is the only mutating operation on `Outcome`. It takes `&mut self`,
    /// so an instance shared between threads must be guarded by the caller
    /// (for example with a `Mutex`) before it can be rewrapped.
    ///
    /// ```
    /// use twotrack::outcome::Outcome;
    ///
    /// let mut current: Outcome<i32, String> = Outcome::Success(1);
    /// let previous = current.rewrap(Outcome::Success(2)).unwrap();
    /// assert_eq!(previous, Outcome::Success(1));
    /// assert_eq!(current, Outcome::Success(2));
    ///
    /// assert!(current.rewrap(Outcome::Failure("no".to_string())).is_err());
    /// assert_eq!(current, Outcome::Success(2));
    /// ```
    pub fn rewrap(&mut self, replacement: Self) -> Result<Self, VariantMismatch<T, E>> {
        let expected = self.tag();
        let found = replacement.tag();
        if expected != found {
            return Err(VariantMismatch {
                expected,
                found,
                rejected: replacement,
            });
        }
        Ok(std::mem::replace(self, replacement))
    }
}

#[track_caller]
#[cold]
fn unwrap_failed(msg: &str, payload: &dyn fmt::Debug) -> ! {
    panic!("{msg}: {payload:?}")
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collects successes into `C`, stopping at the first `Failure`.
impl<A, E, C> FromIterator<Outcome<A, E>> for Outcome<C, E>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}
