use super::Outcome;
use serde::{Deserialize, Serialize};

/// The failure side of [`join`]: which of the two inputs failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinError<E> {
    /// Only the first input failed.
    Left(E),
    /// Only the second input failed.
    Right(E),
    /// Both inputs failed; errors are kept in input order.
    Both(E, E),
}

impl<E> JoinError<E> {
    /// The errors of the first and second input, `None` where that input succeeded.
    pub fn into_pair(self) -> (Option<E>, Option<E>) {
        match self {
            JoinError::Left(left) => (Some(left), None),
            JoinError::Right(right) => (None, Some(right)),
            JoinError::Both(left, right) => (Some(left), Some(right)),
        }
    }
}

/// Combines two outcomes into one holding both values.
///
/// Two successes pair their values. Two failures pair their errors in
/// [`JoinError::Both`]. A mixed pair yields the single failure, tagged with
/// the side it came from.
pub fn join<T, U, E>(
    first: Outcome<T, E>,
    second: Outcome<U, E>,
) -> Outcome<(T, U), JoinError<E>> {
    match (first, second) {
        (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
        (Outcome::Failure(a), Outcome::Failure(b)) => Outcome::Failure(JoinError::Both(a, b)),
        (Outcome::Failure(a), Outcome::Success(_)) => Outcome::Failure(JoinError::Left(a)),
        (Outcome::Success(_), Outcome::Failure(b)) => Outcome::Failure(JoinError::Right(b)),
    }
}

impl<T, E> Outcome<T, E> {
    /// Method form of [`join`].
    pub fn join<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), JoinError<E>> {
        join(self, other)
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting on the success side.
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<T, Outcome<T, E>> {
    /// Removes one level of nesting on the failure side: a `Failure` holding
    /// an outcome becomes that outcome.
    pub fn flatten_err(self) -> Outcome<T, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_two_successes() {
        let joined = join(Outcome::<i32, &str>::Success(1), Outcome::Success(2));
        assert_eq!(joined, Outcome::Success((1, 2)));
    }

    #[test]
    fn test_join_two_failures() {
        let joined = join(
            Outcome::<i32, &str>::Failure("a"),
            Outcome::<i32, &str>::Failure("b"),
        );
        assert_eq!(joined, Outcome::Failure(JoinError::Both("a", "b")));
    }

    #[test]
    fn test_join_mixed_yields_the_failure() {
        let left = Outcome::<i32, &str>::Failure("a").join(Outcome::<i32, &str>::Success(2));
        assert_eq!(left, Outcome::Failure(JoinError::Left("a")));

        let right = Outcome::<i32, &str>::Success(1).join(Outcome::<i32, &str>::Failure("b"));
        assert_eq!(right, Outcome::Failure(JoinError::Right("b")));
    }

    #[test]
    fn test_join_different_value_types() {
        let joined = Outcome::<i32, ()>::Success(1).join(Outcome::Success("one"));
        assert_eq!(joined, Outcome::Success((1, "one")));
    }

    #[test]
    fn test_join_error_into_pair() {
        assert_eq!(JoinError::Left(1).into_pair(), (Some(1), None));
        assert_eq!(JoinError::Right(2).into_pair(), (None, Some(2)));
        assert_eq!(JoinError::Both(1, 2).into_pair(), (Some(1), Some(2)));
    }

    #[test]
    fn test_flatten_nested_success() {
        let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Success(3));
        assert_eq!(nested.flatten(), Outcome::Success(3));

        let inner_failure: Outcome<Outcome<i32, &str>, &str> =
            Outcome::Success(Outcome::Failure("inner"));
        assert_eq!(inner_failure.flatten(), Outcome::Failure("inner"));

        let outer_failure: Outcome<Outcome<i32, &str>, &str> = Outcome::Failure("outer");
        assert_eq!(outer_failure.flatten(), Outcome::Failure("outer"));
    }

    #[test]
    fn test_flatten_err_nested_failure() {
        let nested: Outcome<i32, Outcome<i32, &str>> = Outcome::Failure(Outcome::Failure("inner"));
        assert_eq!(nested.flatten_err(), Outcome::Failure("inner"));

        let recovered: Outcome<i32, Outcome<i32, &str>> = Outcome::Failure(Outcome::Success(9));
        assert_eq!(recovered.flatten_err(), Outcome::Success(9));

        let plain: Outcome<i32, Outcome<i32, &str>> = Outcome::Success(1);
        assert_eq!(plain.flatten_err(), Outcome::Success(1));
    }

    #[test]
    fn test_join_error_serde() {
        let json = serde_json::to_string(&JoinError::Both("a", "b")).unwrap();
        assert_eq!(json, r#"{"both":["a","b"]}"#);
    }
}
