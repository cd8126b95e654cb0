use super::StepFailure;
use crate::outcome::{Outcome, Tag};
use crate::shared::error::TwotrackError;
use std::fmt;
use std::str::FromStr;

/// One stage of an integer pipeline.
///
/// Arithmetic steps and `Positive` work on the success track; `Recover` and
/// `Label` work on the failure track. A step always lets the other track
/// pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Add(i64),
    Sub(i64),
    Mul(i64),
    Div(i64),
    /// Rejects values that are zero or negative.
    Positive,
    /// Replaces any failure with a success holding the given value.
    Recover(i64),
    /// Prefixes the failure with a label.
    Label(String),
}

impl Step {
    /// The track this step acts on.
    pub fn channel(&self) -> Tag {
        match self {
            Step::Add(_) | Step::Sub(_) | Step::Mul(_) | Step::Div(_) | Step::Positive => {
                Tag::Success
            }
            Step::Recover(_) | Step::Label(_) => Tag::Failure,
        }
    }

    pub fn apply(&self, current: Outcome<i64, StepFailure>) -> Outcome<i64, StepFailure> {
        match self {
            Step::Add(rhs) => current.try_map(|lhs| checked(lhs, *rhs, "+", i64::checked_add)),
            Step::Sub(rhs) => current.try_map(|lhs| checked(lhs, *rhs, "-", i64::checked_sub)),
            Step::Mul(rhs) => current.try_map(|lhs| checked(lhs, *rhs, "*", i64::checked_mul)),
            Step::Div(rhs) => current.try_map(|lhs| {
                if *rhs == 0 {
                    Err(StepFailure::DivisionByZero { lhs })
                } else {
                    checked(lhs, *rhs, "/", i64::checked_div)
                }
            }),
            Step::Positive => current.and_then(|value| {
                if value > 0 {
                    Outcome::Success(value)
                } else {
                    Outcome::Failure(StepFailure::NotPositive { value })
                }
            }),
            Step::Recover(value) => current.or_else(|_| Outcome::Success(*value)),
            Step::Label(label) => current.map_err(|failure| StepFailure::Labelled {
                label: label.clone(),
                source: Box::new(failure),
            }),
        }
    }
}

fn checked(
    lhs: i64,
    rhs: i64,
    operation: &'static str,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<i64, StepFailure> {
    op(lhs, rhs).ok_or(StepFailure::Overflow {
        operation,
        lhs,
        rhs,
    })
}

impl FromStr for Step {
    type Err = TwotrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| TwotrackError::InvalidStep {
            step: s.to_string(),
            reason,
        };

        let (name, argument) = match s.trim().split_once(':') {
            Some((name, argument)) => (name.trim().to_lowercase(), Some(argument.trim())),
            None => (s.trim().to_lowercase(), None),
        };

        let number = |argument: Option<&str>| -> Result<i64, TwotrackError> {
            let argument = argument
                .filter(|a| !a.is_empty())
                .ok_or_else(|| invalid(format!("'{}' requires an integer argument", name)))?;
            argument
                .parse::<i64>()
                .map_err(|e| invalid(format!("'{}' is not an integer: {}", argument, e)))
        };

        match name.as_str() {
            "add" => Ok(Step::Add(number(argument)?)),
            "sub" => Ok(Step::Sub(number(argument)?)),
            "mul" => Ok(Step::Mul(number(argument)?)),
            "div" => Ok(Step::Div(number(argument)?)),
            "recover" => Ok(Step::Recover(number(argument)?)),
            "positive" => match argument {
                None => Ok(Step::Positive),
                Some(_) => Err(invalid("'positive' takes no argument".to_string())),
            },
            "label" => match argument.filter(|a| !a.is_empty()) {
                Some(text) => Ok(Step::Label(text.to_string())),
                None => Err(invalid("'label' requires a text argument".to_string())),
            },
            "" => Err(invalid("Step is empty".to_string())),
            other => Err(invalid(format!("Unknown operation '{}'", other))),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Add(n) => write!(f, "add:{}", n),
            Step::Sub(n) => write!(f, "sub:{}", n),
            Step::Mul(n) => write!(f, "mul:{}", n),
            Step::Div(n) => write!(f, "div:{}", n),
            Step::Positive => write!(f, "positive"),
            Step::Recover(n) => write!(f, "recover:{}", n),
            Step::Label(text) => write!(f, "label:{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(v: i64) -> Outcome<i64, StepFailure> {
        Outcome::Success(v)
    }

    fn not_positive(value: i64) -> Outcome<i64, StepFailure> {
        Outcome::Failure(StepFailure::NotPositive { value })
    }

    #[test]
    fn test_parse_arithmetic_steps() {
        assert_eq!("add:5".parse::<Step>().unwrap(), Step::Add(5));
        assert_eq!("sub:-2".parse::<Step>().unwrap(), Step::Sub(-2));
        assert_eq!("MUL: 3".parse::<Step>().unwrap(), Step::Mul(3));
        assert_eq!("div:4".parse::<Step>().unwrap(), Step::Div(4));
    }

    #[test]
    fn test_parse_track_steps() {
        assert_eq!("positive".parse::<Step>().unwrap(), Step::Positive);
        assert_eq!("Recover:0".parse::<Step>().unwrap(), Step::Recover(0));
        assert_eq!(
            "label:Parsing Stage".parse::<Step>().unwrap(),
            Step::Label("Parsing Stage".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_operation() {
        let err = "pow:2".parse::<Step>().unwrap_err();
        assert!(err.to_string().contains("Unknown operation 'pow'"));
    }

    #[test]
    fn test_parse_missing_argument() {
        let err = "add".parse::<Step>().unwrap_err();
        assert!(err.to_string().contains("requires an integer argument"));

        let err = "label:".parse::<Step>().unwrap_err();
        assert!(err.to_string().contains("requires a text argument"));
    }

    #[test]
    fn test_parse_bad_argument() {
        let err = "mul:two".parse::<Step>().unwrap_err();
        assert!(err.to_string().contains("'two' is not an integer"));

        let err = "positive:1".parse::<Step>().unwrap_err();
        assert!(err.to_string().contains("takes no argument"));

        assert!("".parse::<Step>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for step in [Step::Add(1), Step::Positive, Step::Label("x".to_string())] {
            assert_eq!(step.to_string().parse::<Step>().unwrap(), step);
        }
    }

    #[test]
    fn test_channel() {
        assert_eq!(Step::Mul(2).channel(), Tag::Success);
        assert_eq!(Step::Positive.channel(), Tag::Success);
        assert_eq!(Step::Recover(0).channel(), Tag::Failure);
        assert_eq!(Step::Label("x".to_string()).channel(), Tag::Failure);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Step::Add(2).apply(ok(3)), ok(5));
        assert_eq!(Step::Sub(2).apply(ok(3)), ok(1));
        assert_eq!(Step::Mul(2).apply(ok(3)), ok(6));
        assert_eq!(Step::Div(2).apply(ok(7)), ok(3));
    }

    #[test]
    fn test_arithmetic_overflow_is_failure() {
        assert_eq!(
            Step::Add(1).apply(ok(i64::MAX)),
            Outcome::Failure(StepFailure::Overflow {
                operation: "+",
                lhs: i64::MAX,
                rhs: 1
            })
        );
        assert!(Step::Div(-1).apply(ok(i64::MIN)).is_failure());
    }

    #[test]
    fn test_division_by_zero_is_failure() {
        assert_eq!(
            Step::Div(0).apply(ok(9)),
            Outcome::Failure(StepFailure::DivisionByZero { lhs: 9 })
        );
    }

    #[test]
    fn test_positive() {
        assert_eq!(Step::Positive.apply(ok(1)), ok(1));
        assert_eq!(Step::Positive.apply(ok(0)), not_positive(0));
        assert_eq!(Step::Positive.apply(ok(-4)), not_positive(-4));
    }

    #[test]
    fn test_success_steps_pass_failure_through() {
        for step in [Step::Add(1), Step::Div(0), Step::Positive] {
            assert_eq!(step.apply(not_positive(-1)), not_positive(-1));
        }
    }

    #[test]
    fn test_recover() {
        assert_eq!(Step::Recover(7).apply(not_positive(-1)), ok(7));
        assert_eq!(Step::Recover(7).apply(ok(1)), ok(1));
    }

    #[test]
    fn test_label_stays_on_failure_track() {
        let labelled = Step::Label("stage".to_string()).apply(not_positive(-1));
        assert_eq!(
            labelled.unwrap_err().to_string(),
            "stage: -1 is not positive"
        );
        assert_eq!(Step::Label("stage".to_string()).apply(ok(2)), ok(2));
    }
}
