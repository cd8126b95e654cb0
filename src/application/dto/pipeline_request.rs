use crate::pipeline::{Pipeline, Step};

/// PipelineRequest - Internal request DTO for the pipeline use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRequest {
    /// Raw input, parsed by the use case
    pub input: String,
    /// Steps to run, in order
    pub pipeline: Pipeline,
}

impl PipelineRequest {
    pub fn new(input: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            input: input.into(),
            pipeline: Pipeline::new(steps),
        }
    }
}
