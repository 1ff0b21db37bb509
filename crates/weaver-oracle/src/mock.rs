use std::collections::VecDeque;
use std::sync::Mutex;

use crate::client::{Oracle, OracleError};

/// Replays scripted responses in order and records every prompt (for testing).
///
/// Once the script runs out, every call fails with a transport error.
pub struct ScriptedOracle {
    script: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl Default for ScriptedOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn push_ok(&self, text: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_err(&self, message: impl Into<String>) {
        self.script.lock().unwrap().push_back(Err(message.into()));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Oracle for ScriptedOracle {
    fn analyze(&self, prompt: &str) -> Result<String, OracleError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(OracleError::Transport(message)),
            None => Err(OracleError::Transport("script exhausted".into())),
        }
    }
}
