use crate::outcome::Outcome;
use crate::pipeline::{Step, StepFailure};

/// StepReporter port for reporting pipeline evaluation
///
/// Reports go to a side channel (stderr for the CLI) so that the formatted
/// result on stdout stays machine readable.
pub trait StepReporter {
    /// Reports a free-form progress message
    fn report(&self, message: &str);

    /// Reports the outcome after one step
    ///
    /// # Arguments
    /// * `index` - Zero-based position of the step in the pipeline
    /// * `step` - The step that ran
    /// * `applied` - `false` when the step's track did not match and the
    ///   outcome passed through unchanged
    /// * `outcome` - The outcome after the step
    fn report_step(
        &self,
        index: usize,
        step: &Step,
        applied: bool,
        outcome: &Outcome<i64, StepFailure>,
    );

    /// Reports a warning message
    fn report_warning(&self, message: &str);

    /// Reports the final outcome of the pipeline
    fn report_completion(&self, outcome: &Outcome<i64, StepFailure>);
}
