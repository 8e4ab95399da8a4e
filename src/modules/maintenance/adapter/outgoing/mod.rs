mod auto_confirm;
mod terminal_prompt;

pub use auto_confirm::AutoConfirm;
pub use terminal_prompt::TerminalPrompt;
