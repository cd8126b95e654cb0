use thiserror::Error;

/// Why a pipeline ended up on the failure track.
///
/// These are domain failures: they travel inside `Outcome::Failure` and are
/// never raised as application errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepFailure {
    #[error("input '{input}' is not an integer: {details}")]
    InvalidInput { input: String, details: String },

    #[error("{lhs} {operation} {rhs} overflows a 64-bit integer")]
    Overflow {
        operation: &'static str,
        lhs: i64,
        rhs: i64,
    },

    #[error("cannot divide {lhs} by zero")]
    DivisionByZero { lhs: i64 },

    #[error("{value} is not positive")]
    NotPositive { value: i64 },

    #[error("{label}: {source}")]
    Labelled {
        label: String,
        source: Box<StepFailure>,
    },
}
