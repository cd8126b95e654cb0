//! twotrack - a two-variant `Outcome` type with railway-style combinators
//!
//! The heart of the crate is [`outcome::Outcome`], a closed sum of
//! `Success(T)` and `Failure(E)` with combinators that act on one track and
//! let the other pass through. [`outcome::lift`] and
//! [`outcome::lift_result`] bring panicking or `Result`-returning code onto
//! the tracks.
//!
//! The remaining modules build the `twotrack` CLI on top of it, following a
//! hexagonal layout:
//!
//! - **Domain** (`pipeline`): integer pipeline steps evaluated on an `Outcome`
//! - **Application** (`application`): the evaluation use case, DTOs and factories
//! - **Ports** (`ports`): reporter, formatter and presenter interfaces
//! - **Adapters** (`adapters`): stderr, filesystem and formatter implementations
//! - **Shared** (`shared`): error types, exit codes and file checks
//!
//! # Example
//!
//! ```
//! use twotrack::prelude::*;
//!
//! let pipeline = Pipeline::new(vec![Step::Positive, Step::Mul(2)]);
//! let result = pipeline.run(parse_input("10")).map(|v| v.to_string());
//! assert_eq!(result, Outcome::Success("20".to_string()));
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod outcome;
pub mod pipeline;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{NullStepReporter, StderrStepReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{
        OutputFormat, PipelineReport, PipelineRequest, PipelineResponse,
    };
    pub use crate::application::use_cases::EvaluatePipelineUseCase;
    pub use crate::outcome::{
        join, lift, lift_result, Fault, JoinError, Monad, Outcome, Tag, UnwrapError,
        VariantMismatch,
    };
    pub use crate::pipeline::{parse_input, Pipeline, Step, StepFailure};
    pub use crate::ports::outbound::{OutcomeFormatter, OutputPresenter, StepReporter};
    pub use crate::shared::Result;
}
