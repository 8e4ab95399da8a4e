mod confirmation_prompt;

pub use confirmation_prompt::{ConfirmationPrompt, ConfirmationPromptError};
