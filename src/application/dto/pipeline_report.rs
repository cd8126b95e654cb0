use super::{PipelineRequest, PipelineResponse};
use crate::outcome::{Outcome, Tag};
use crate::shared::error::ExitCode;
use serde::Serialize;

/// Presentation model handed to formatters
///
/// Both tracks are rendered to strings, so formatters never need to know
/// about the integer domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub input: String,
    pub steps: Vec<String>,
    pub applied_steps: usize,
    pub outcome: Outcome<String, String>,
}

impl PipelineReport {
    pub fn build(request: &PipelineRequest, response: &PipelineResponse) -> Self {
        Self {
            input: request.input.clone(),
            steps: request
                .pipeline
                .steps()
                .iter()
                .map(ToString::to_string)
                .collect(),
            applied_steps: response.applied_steps,
            outcome: response
                .outcome
                .as_ref()
                .map(|value| value.to_string())
                .map_err(|failure| failure.to_string()),
        }
    }

    /// Exit code reflecting which track the pipeline finished on
    pub fn exit_code(&self) -> ExitCode {
        match self.outcome.tag() {
            Tag::Success => ExitCode::Success,
            Tag::Failure => ExitCode::PipelineFailed,
        }
    }
}
