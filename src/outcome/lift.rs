//! The capture boundary between plain fallible code and `Outcome`.
//!
//! Only the functions in this module catch panics. Everything else in the
//! crate lets a panic unwind as usual.

use super::Outcome;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};
use thiserror::Error;

/// A fault captured while running caller-supplied code.
#[derive(Debug, Error)]
pub enum Fault {
    /// The code panicked; the panic message is kept when it was a string.
    #[error("operation panicked: {message}")]
    Panicked { message: String },

    /// The code returned an error.
    #[error(transparent)]
    Raised(#[from] anyhow::Error),
}

impl Fault {
    pub fn is_panic(&self) -> bool {
        matches!(self, Fault::Panicked { .. })
    }

    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "panic payload was not a string".to_string()
        };
        Fault::Panicked { message }
    }
}

/// Runs `f`, wrapping its return value in `Success` or a panic in `Failure`.
///
/// Arguments are bound by closure capture:
///
/// ```
/// use twotrack::outcome::{lift, Outcome};
///
/// fn area(w: u32, h: u32) -> u32 { w * h }
///
/// let (w, h) = (3, 4);
/// assert_eq!(lift(move || area(w, h)).success(), Some(12));
/// ```
pub fn lift<T, F>(f: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(Fault::from_panic(payload)),
    }
}

/// Like [`lift`], for code that reports errors by returning `Err`.
///
/// Both a panic and a returned error end up as a `Failure`.
pub fn lift_result<T, X, F>(f: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> Result<T, X> + UnwindSafe,
    X: Into<anyhow::Error>,
{
    lift(f).and_then(|result| match result {
        Ok(value) => Outcome::Success(value),
        Err(raised) => Outcome::Failure(Fault::Raised(raised.into())),
    })
}

impl<T, E> Outcome<T, E> {
    /// [`Outcome::map`] with a capture boundary: a panic inside `f` becomes a
    /// `Failure` carrying the converted [`Fault`].
    ///
    /// `f` is treated as unwind safe. After a captured panic the value `f`
    /// consumed is gone; anything `f` borrowed must not be relied upon.
    pub fn map_caught<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<Fault>,
    {
        match self {
            Outcome::Success(value) => lift(AssertUnwindSafe(move || f(value))).map_err(E::from),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// [`Outcome::map_err`] with a capture boundary. The result is a
    /// `Failure` either way.
    pub fn map_err_caught<E2, G>(self, g: G) -> Outcome<T, E2>
    where
        G: FnOnce(E) -> E2,
        E2: From<Fault>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => match lift(AssertUnwindSafe(move || g(error))) {
                Outcome::Success(mapped) => Outcome::Failure(mapped),
                Outcome::Failure(fault) => Outcome::Failure(E2::from(fault)),
            },
        }
    }
}
