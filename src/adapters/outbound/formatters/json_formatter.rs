use crate::application::dto::PipelineReport;
use crate::ports::outbound::OutcomeFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter rendering the whole report as pretty JSON
///
/// The outcome is externally tagged: `{"success": "20"}` or
/// `{"failure": "..."}`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeFormatter for JsonFormatter {
    fn format(&self, report: &PipelineReport) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")?;
        json.push('\n');
        Ok(json)
    }
}
