//! Integer pipelines evaluated on the two tracks of an [`Outcome`].

mod failure;
mod step;

pub use failure::StepFailure;
pub use step::Step;

use crate::outcome::{lift_result, Outcome};

/// Parses the raw pipeline input.
///
/// A malformed input is a domain failure, so it starts the pipeline on the
/// failure track instead of aborting it.
pub fn parse_input(raw: &str) -> Outcome<i64, StepFailure> {
    lift_result(|| raw.trim().parse::<i64>()).map_err(|fault| StepFailure::InvalidInput {
        input: raw.to_string(),
        details: fault.to_string(),
    })
}

/// An ordered list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// `positive, mul:2`: doubles positive numbers and rejects the rest.
    pub fn default_steps() -> Vec<Step> {
        vec![Step::Positive, Step::Mul(2)]
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step in order, calling `observe` after each one.
    ///
    /// The observer receives the step, whether the step's track matched the
    /// incoming outcome, and the outcome the step produced.
    pub fn run_with<F>(
        &self,
        start: Outcome<i64, StepFailure>,
        mut observe: F,
    ) -> Outcome<i64, StepFailure>
    where
        F: FnMut(&Step, bool, &Outcome<i64, StepFailure>),
    {
        self.steps.iter().fold(start, |current, step| {
            let applied = current.tag() == step.channel();
            let next = step.apply(current);
            observe(step, applied, &next);
            next
        })
    }

    pub fn run(&self, start: Outcome<i64, StepFailure>) -> Outcome<i64, StepFailure> {
        self.run_with(start, |_, _, _| {})
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Self::default_steps())
    }
}
