use twotrack::prelude::*;

/// Mock StepReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockStepReporter {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockStepReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl StepReporter for MockStepReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_step(
        &self,
        index: usize,
        step: &Step,
        applied: bool,
        outcome: &Outcome<i64, StepFailure>,
    ) {
        let marker = if applied { "applied" } else { "skipped" };
        self.messages
            .lock()
            .unwrap()
            .push(format!("Step {}: {} {} -> {}", index, step, marker, outcome.tag()));
    }

    fn report_warning(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Warning: {}", message));
    }

    fn report_completion(&self, outcome: &Outcome<i64, StepFailure>) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", outcome.tag()));
    }
}
