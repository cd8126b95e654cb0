use super::Outcome;

/// A container whose value can be transformed and chained without taking it out.
///
/// `wrap` puts a value in the container (`pure`/`return` elsewhere), `fmap`
/// applies a plain function to the contained value and `bind` applies a
/// function that itself returns a container. [`Monad::Rebound`] names the
/// same container holding a different type, so `Outcome<T, E>` rebinds to
/// `Outcome<U, E>` and keeps its error type.
///
/// For [`Outcome`] the success channel is the monadic one: `fmap` is
/// [`Outcome::map`] and `bind` is [`Outcome::and_then`].
///
/// Taking the value out is left to each container (`Outcome::unwrap` needs
/// `E: Debug` for its panic message, which a trait method cannot require).
pub trait Monad: Sized {
    type Inner;
    type Rebound<U>: Monad<Inner = U>;

    fn wrap(value: Self::Inner) -> Self;

    fn fmap<U, F>(self, f: F) -> Self::Rebound<U>
    where
        F: FnOnce(Self::Inner) -> U;

    fn bind<U, F>(self, f: F) -> Self::Rebound<U>
    where
        F: FnOnce(Self::Inner) -> Self::Rebound<U>;

    /// Removes one level of nesting.
    ///
    /// The contained value must convert into the rebound container. For a
    /// nested container such as `Outcome<Outcome<U, E>, E>` that conversion
    /// is the identity.
    fn flatten<U>(self) -> Self::Rebound<U>
    where
        Self::Inner: Into<Self::Rebound<U>>,
    {
        self.bind(Into::into)
    }

    /// Pairs the values of two containers, short-circuiting on the first
    /// empty or failed one.
    fn join<U>(self, other: Self::Rebound<U>) -> Self::Rebound<(Self::Inner, U)>;
}

impl<T, E> Monad for Outcome<T, E> {
    type Inner = T;
    type Rebound<U> = Outcome<U, E>;

    fn wrap(value: T) -> Self {
        Outcome::Success(value)
    }

    fn fmap<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.and_then(f)
    }

    /// Keeps the error type, so the first failure wins. The inherent
    /// [`Outcome::join`] reports both failures through `JoinError` instead.
    fn join<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        self.and_then(|first| other.map(|second| (first, second)))
    }
}

impl<T> Monad for Option<T> {
    type Inner = T;
    type Rebound<U> = Option<U>;

    fn wrap(value: T) -> Self {
        Some(value)
    }

    fn fmap<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    fn bind<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(f)
    }

    fn join<U>(self, other: Option<U>) -> Option<(T, U)> {
        self.zip(other)
    }
}
