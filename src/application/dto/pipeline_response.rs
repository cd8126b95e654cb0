use crate::outcome::Outcome;
use crate::pipeline::StepFailure;

/// PipelineResponse - Result of evaluating a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResponse {
    /// Final outcome after the last step
    pub outcome: Outcome<i64, StepFailure>,
    /// Number of steps whose track matched and which therefore ran
    pub applied_steps: usize,
}
