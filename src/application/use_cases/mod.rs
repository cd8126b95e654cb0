/// Use cases module containing application logic orchestration
mod evaluate_pipeline;

pub use evaluate_pipeline::EvaluatePipelineUseCase;
