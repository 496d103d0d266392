use std::sync::Mutex;

use async_trait::async_trait;

use crate::{GenerationError, TextGenerator};

/// A generator for tests that returns a preconfigured result and remembers
/// every prompt it was given.
pub struct MockGenerator {
    outcome: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// A mock whose every call returns `text`.
    pub fn success(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A mock whose every call fails with a request error carrying `message`.
    pub fn failure(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(GenerationError::Request(message.clone())),
        }
    }
}
