use crate::application::dto::{PipelineRequest, PipelineResponse};
use crate::outcome::Outcome;
use crate::pipeline::parse_input;
use crate::ports::outbound::StepReporter;

/// EvaluatePipelineUseCase - Runs a pipeline on the two tracks of an `Outcome`
///
/// # Type Parameters
/// * `R` - StepReporter implementation
pub struct EvaluatePipelineUseCase<R> {
    reporter: R,
}

impl<R> EvaluatePipelineUseCase<R>
where
    R: StepReporter,
{
    /// Creates a new EvaluatePipelineUseCase with an injected reporter
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Executes the pipeline
    ///
    /// Evaluation cannot fail at the application level: a malformed input or
    /// a failing step is carried in the response's `Failure`.
    pub fn execute(&self, request: &PipelineRequest) -> PipelineResponse {
        self.reporter.report(&format!(
            "📥 Input '{}' with {} step(s)",
            request.input,
            request.pipeline.len()
        ));

        let start = parse_input(&request.input);
        if let Outcome::Failure(ref failure) = start {
            self.reporter
                .report_warning(&format!("⚠️  Starting on the failure track: {}", failure));
        }

        let mut index = 0;
        let mut applied_steps = 0;
        let outcome = request
            .pipeline
            .run_with(start, |step, applied, outcome| {
                if applied {
                    applied_steps += 1;
                }
                self.reporter.report_step(index, step, applied, outcome);
                index += 1;
            });

        self.reporter.report_completion(&outcome);

        PipelineResponse {
            outcome,
            applied_steps,
        }
    }
}
