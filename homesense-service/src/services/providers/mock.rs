//! Mock provider implementation for testing.

use super::{CompletionError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Behaviour {
    Echo,
    Reply(String),
    Fail(String),
}

/// Scripted text provider that records every prompt it receives.
#[derive(Debug)]
pub struct MockTextProvider {
    behaviour: Behaviour,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Answers `Mock response for: <prompt>`.
    pub fn echo() -> Self {
        Self::with(Behaviour::Echo)
    }

    /// Always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with(Behaviour::Reply(text.into()))
    }

    /// Always fails with an API error carrying `cause`.
    pub fn failing(cause: impl Into<String>) -> Self {
        Self::with(Behaviour::Fail(cause.into()))
    }

    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts().len()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(prompt.to_string());

        match &self.behaviour {
            Behaviour::Echo => Ok(format!("Mock response for: {}", prompt)),
            Behaviour::Reply(text) => Ok(text.clone()),
            Behaviour::Fail(cause) => Err(CompletionError::Api(cause.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}
