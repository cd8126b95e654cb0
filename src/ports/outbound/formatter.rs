use crate::application::dto::PipelineReport;
use crate::shared::Result;

/// OutcomeFormatter port for rendering a pipeline report
pub trait OutcomeFormatter {
    /// Formats the report as a string ready to be presented
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &PipelineReport) -> Result<String>;
}
