/// Mock implementations for testing
mod mock_output_presenter;
mod mock_step_reporter;

pub use mock_output_presenter::MockOutputPresenter;
pub use mock_step_reporter::MockStepReporter;
