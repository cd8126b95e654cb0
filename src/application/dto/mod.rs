/// Data Transfer Objects for application layer
mod output_format;
mod pipeline_report;
mod pipeline_request;
mod pipeline_response;

pub use output_format::OutputFormat;
pub use pipeline_report::PipelineReport;
pub use pipeline_request::PipelineRequest;
pub use pipeline_response::PipelineResponse;
