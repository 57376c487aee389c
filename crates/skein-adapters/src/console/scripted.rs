//! Scripted console adapter for testing.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use skein_core::{
    application::{ApplicationError, ports::Console},
    error::SkeinResult,
};

/// Console double that replays pre-programmed answers.
///
/// Prompts are recorded so tests can assert what the user would have been
/// asked. Running out of scripted answers is an error, not a hang.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inner: Arc<Mutex<ScriptedConsoleInner>>,
}

#[derive(Debug, Default)]
struct ScriptedConsoleInner {
    selections: VecDeque<usize>,
    confirmations: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console with no scripted answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next `select_one` call.
    pub fn push_selection(&self, index: usize) -> &Self {
        self.inner.lock().unwrap().selections.push_back(index);
        self
    }

    /// Queue an answer for the next `confirm` call.
    pub fn push_confirmation(&self, answer: bool) -> &Self {
        self.inner.lock().unwrap().confirmations.push_back(answer);
        self
    }

    /// All prompts issued so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.inner.lock().unwrap().prompts.clone()
    }
}

impl Console for ScriptedConsole {
    fn select_one(&self, prompt: &str, _options: &[String]) -> SkeinResult<usize> {
        let mut inner = self.inner.lock().map_err(|_| ApplicationError::StoreLock)?;
        inner.prompts.push(prompt.to_owned());
        inner.selections.pop_front().ok_or_else(|| {
            ApplicationError::Prompt {
                reason: format!("no scripted selection left for prompt '{prompt}'"),
            }
            .into()
        })
    }

    fn confirm(&self, prompt: &str, _default: bool) -> SkeinResult<bool> {
        let mut inner = self.inner.lock().map_err(|_| ApplicationError::StoreLock)?;
        inner.prompts.push(prompt.to_owned());
        inner.confirmations.pop_front().ok_or_else(|| {
            ApplicationError::Prompt {
                reason: format!("no scripted confirmation left for prompt '{prompt}'"),
            }
            .into()
        })
    }
}
