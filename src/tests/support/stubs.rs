use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::content_store::application::ports::outgoing::DocumentHeader;
use crate::modules::maintenance::application::ports::outgoing::{
    ConfirmationPrompt, ConfirmationPromptError,
};

/// Prompt that replies with a fixed answer and remembers how often it was
/// asked.
#[derive(Debug)]
pub struct ScriptedPrompt {
    answer: Result<String, ConfirmationPromptError>,
    asked: Mutex<Vec<usize>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Ok(answer.to_string()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(ConfirmationPromptError::Io(message.to_string())),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Number of candidates shown on each call.
    pub fn asked(&self) -> Vec<usize> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationPrompt for ScriptedPrompt {
    async fn ask(&self, candidates: &[DocumentHeader]) -> Result<String, ConfirmationPromptError> {
        self.asked.lock().unwrap().push(candidates.len());
        self.answer.clone()
    }
}
