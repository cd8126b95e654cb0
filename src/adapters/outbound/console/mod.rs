/// Console adapters for reporting to stderr
mod step_reporter;

pub use step_reporter::{NullStepReporter, StderrStepReporter};
