use twotrack::prelude::*;

/// Mock OutputPresenter that keeps everything it is asked to present
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub presented: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.presented.lock().unwrap().last().cloned()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.presented.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
