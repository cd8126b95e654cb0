/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod formatter;
pub mod output_presenter;
pub mod step_reporter;

pub use formatter::OutcomeFormatter;
pub use output_presenter::OutputPresenter;
pub use step_reporter::StepReporter;
