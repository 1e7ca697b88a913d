//! Editor configuration.

use log::debug;
use std::env;

/// Prompt written before each line is read.
pub const DEFAULT_PROMPT: &str = "> ";

/// Environment variable overriding the prompt.
pub const PROMPT_ENV: &str = "SPHERES_PROMPT";

/// Options for an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Prompt marker.
    pub prompt: String,
}

impl EditorOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Default options, with the prompt taken from `SPHERES_PROMPT` if set.
    pub fn from_env() -> Self {
        let options = Self::new();
        match env::var(PROMPT_ENV) {
            Ok(prompt) => {
                debug!("Using prompt {:?} from {}", prompt, PROMPT_ENV);
                options.with_prompt(prompt)
            }
            Err(_) => options,
        }
    }

    /// Set the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::new()
    }
}
