use crate::outcome::Outcome;
use crate::pipeline::{Step, StepFailure};
use crate::ports::outbound::StepReporter;
use owo_colors::OwoColorize;

/// StderrStepReporter adapter for reporting pipeline evaluation to stderr
///
/// Writes to stderr so it doesn't interfere with the report on stdout.
/// Tracks are coloured with owo-colors when `use_color` is set.
pub struct StderrStepReporter {
    use_color: bool,
}

impl StderrStepReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn render(&self, outcome: &Outcome<i64, StepFailure>) -> String {
        match (outcome, self.use_color) {
            (Outcome::Success(value), true) => format!("{} {}", "Success".green(), value),
            (Outcome::Success(value), false) => format!("Success {}", value),
            (Outcome::Failure(failure), true) => format!("{} {}", "Failure".red(), failure),
            (Outcome::Failure(failure), false) => format!("Failure {}", failure),
        }
    }

    fn render_tag(&self, outcome: &Outcome<i64, StepFailure>) -> String {
        let tag = outcome.tag().to_string().to_lowercase();
        match (outcome.is_success(), self.use_color) {
            (true, true) => tag.green().to_string(),
            (false, true) => tag.red().to_string(),
            (_, false) => tag,
        }
    }

    fn step_line(
        &self,
        index: usize,
        step: &Step,
        applied: bool,
        outcome: &Outcome<i64, StepFailure>,
    ) -> String {
        let marker = if applied { "→" } else { "·" };
        let suffix = if applied { "" } else { " (passed through)" };
        let step = if self.use_color && !applied {
            step.to_string().dimmed().to_string()
        } else {
            step.to_string()
        };
        format!(
            "   {} [{}] {:<16} {}{}",
            marker,
            index + 1,
            step,
            self.render(outcome),
            suffix
        )
    }
}

impl Default for StderrStepReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StepReporter for StderrStepReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_step(
        &self,
        index: usize,
        step: &Step,
        applied: bool,
        outcome: &Outcome<i64, StepFailure>,
    ) {
        eprintln!("{}", self.step_line(index, step, applied, outcome));
    }

    fn report_warning(&self, message: &str) {
        if self.use_color {
            eprintln!("{}", message.yellow());
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, outcome: &Outcome<i64, StepFailure>) {
        eprintln!();
        eprintln!("🏁 Finished on the {} track", self.render_tag(outcome));
    }
}

/// NullStepReporter adapter that discards every report
///
/// Used when verbose output is off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStepReporter;

impl StepReporter for NullStepReporter {
    fn report(&self, _message: &str) {}

    fn report_step(
        &self,
        _index: usize,
        _step: &Step,
        _applied: bool,
        _outcome: &Outcome<i64, StepFailure>,
    ) {
    }

    fn report_warning(&self, _message: &str) {}

    fn report_completion(&self, _outcome: &Outcome<i64, StepFailure>) {}
}
