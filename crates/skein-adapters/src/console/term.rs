//! Terminal console adapter using dialoguer.

use dialoguer::{Confirm, Select};

use skein_core::{
    application::{ApplicationError, ports::Console},
    error::{SkeinError, SkeinResult},
};

/// Production console backed by dialoguer prompts on the controlling
/// terminal.
#[derive(Debug, Clone, Copy)]
pub struct TermConsole;

impl TermConsole {
    /// Create a new terminal console adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn select_one(&self, prompt: &str, options: &[String]) -> SkeinResult<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()
            .map_err(map_prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> SkeinResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(map_prompt_error)
    }
}

fn map_prompt_error(e: dialoguer::Error) -> SkeinError {
    ApplicationError::Prompt {
        reason: e.to_string(),
    }
    .into()
}
