use crate::config::{OracleConfig, MAX_TOKENS, MODEL, REQUEST_TIMEOUT, TEMPERATURE, TOP_P};
use crate::prompt::SYSTEM_PROMPT;

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,
    #[error("oracle request failed: {0}")]
    Transport(String),
    #[error("oracle returned HTTP {0}")]
    Status(u16),
    #[error("malformed oracle response: {0}")]
    MalformedResponse(String),
    #[error("oracle returned no completion text")]
    EmptyCompletion,
}

impl From<ureq::Error> for OracleError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => OracleError::Status(code),
            other => OracleError::Transport(other.to_string()),
        }
    }
}

/// The external reasoning service: one prompt in, free text out.
///
/// Output is not trusted to be well-formed; callers reconcile it.
pub trait Oracle {
    fn analyze(&self, prompt: &str) -> Result<String, OracleError>;
}

impl<F> Oracle for F
where
    F: Fn(&str) -> Result<String, OracleError>,
{
    fn analyze(&self, prompt: &str) -> Result<String, OracleError> {
        self(prompt)
    }
}

// ── OpenAI-compatible chat completions ──

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint
/// (Groq by default).
pub struct ChatCompletionsOracle {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl ChatCompletionsOracle {
    pub fn new(config: &OracleConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();
        Self {
            agent,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl Oracle for ChatCompletionsOracle {
    fn analyze(&self, prompt: &str) -> Result<String, OracleError> {
        let body = request_body(prompt);
        let mut resp = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(&body)?;
        let envelope: serde_json::Value = resp.body_mut().read_json()?;
        completion_text(&envelope)
    }
}

/// Build the request payload. Decoding parameters are fixed.
pub(crate) fn request_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "model": MODEL,
        "messages": [
            {"role": "system", "content": SYSTEM_PROMPT},
            {"role": "user", "content": prompt},
        ],
        "temperature": TEMPERATURE,
        "max_tokens": MAX_TOKENS,
        "top_p": TOP_P,
    })
}

/// Pull `choices[0].message.content` out of a completion envelope, trimmed.
pub(crate) fn completion_text(envelope: &serde_json::Value) -> Result<String, OracleError> {
    if let Some(err) = envelope.get("error") {
        let message = err
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(OracleError::MalformedResponse(message));
    }

    let content = envelope
        .pointer("/choices/0/message/content")
        .ok_or_else(|| OracleError::MalformedResponse("no choices[0].message.content".into()))?;

    if content.is_null() {
        return Err(OracleError::EmptyCompletion);
    }
    match content.as_str().map(str::trim) {
        Some("") => Err(OracleError::EmptyCompletion),
        Some(text) => Ok(text.to_string()),
        None => Err(OracleError::MalformedResponse(format!(
            "content is not a string: {content}"
        ))),
    }
}
