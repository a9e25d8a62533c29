//! Mock generator implementation for testing.

use super::{GeneratorError, TextGenerator};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted outcome for the mock generator.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Every call succeeds with this text.
    Text(String),
    /// Every call succeeds but yields no content.
    Empty,
    /// Every call fails with this message.
    Fail(String),
}

/// Mock text generator for testing. Records the topics it was called with.
pub struct MockTextGenerator {
    outcome: MockOutcome,
    calls: Mutex<Vec<String>>,
}

impl MockTextGenerator {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Topics this mock has been asked to generate for.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, topic: &str) -> Result<String, GeneratorError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(topic.to_string());

        match &self.outcome {
            MockOutcome::Text(text) => Ok(text.clone()),
            MockOutcome::Empty => Ok(String::new()),
            MockOutcome::Fail(message) => Err(GeneratorError::Invoke(message.clone())),
        }
    }
}
