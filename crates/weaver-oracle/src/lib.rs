mod adapter;
mod client;
mod config;
mod mock;
mod prompt;

#[cfg(test)]
mod test_log;

pub use adapter::{OracleAdapter, EMPTY_RESULT};
pub use client::{ChatCompletionsOracle, Oracle, OracleError};
pub use config::{OracleConfig, API_KEY_VAR, DEFAULT_ENDPOINT, ENDPOINT_VAR};
pub use mock::ScriptedOracle;
pub use prompt::{render_prompt, render_sessions, SYSTEM_PROMPT};
