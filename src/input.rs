//! Player input abstraction.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::InputError;

/// A source of player choices.
pub trait InputProvider {
    /// Shows `prompt` and returns a number within `lower..=upper`.
    ///
    /// Invalid answers are handled by the provider, usually by asking again,
    /// and are never returned.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Closed`] if the source has no more answers.
    fn request_integer(&mut self, prompt: &str, lower: u32, upper: u32) -> Result<u32, InputError>;

    /// Shows a message that needs no answer.
    fn notify(&mut self, _message: &str) {}
}

/// Replays a fixed list of answers.
///
/// Answers outside the requested bounds are skipped, the way a console
/// provider asks again after an invalid entry. Prompts and notifications are
/// recorded for inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<u32>,
    prompts: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedInput {
    /// Creates a provider that answers with `answers` in order.
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = u32>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Returns every prompt shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns every notification shown so far.
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Returns the number of unused answers.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputProvider for ScriptedInput {
    fn request_integer(&mut self, prompt: &str, lower: u32, upper: u32) -> Result<u32, InputError> {
        self.prompts.push(String::from(prompt));
        while let Some(answer) = self.answers.pop_front() {
            if (lower..=upper).contains(&answer) {
                return Ok(answer);
            }
        }
        Err(InputError::Closed)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(String::from(message));
    }
}
