use crate::application::dto::PipelineReport;
use crate::outcome::Outcome;
use crate::ports::outbound::OutcomeFormatter;
use crate::shared::Result;

/// TextFormatter adapter rendering the outcome as a single line
///
/// Colours are left to the stderr reporter; stdout stays plain so it can
/// be piped.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeFormatter for TextFormatter {
    fn format(&self, report: &PipelineReport) -> Result<String> {
        Ok(match &report.outcome {
            Outcome::Success(value) => format!("Success: {}\n", value),
            Outcome::Failure(error) => format!("Failure: {}\n", error),
        })
    }
}
