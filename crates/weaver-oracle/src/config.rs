use std::time::Duration;

use crate::client::OracleError;

// ── Fixed decoding configuration ──

pub const MODEL: &str = "llama-3.3-70b-versatile";
pub const TEMPERATURE: f64 = 0.1;
pub const TOP_P: f64 = 0.9;
pub const MAX_TOKENS: u32 = 2000;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const ENDPOINT_VAR: &str = "TRUTH_WEAVER_ENDPOINT";

// ── Process configuration ──

/// Credentials and endpoint for the oracle. Built once at start-up and
/// handed to [`crate::ChatCompletionsOracle::new`].
#[derive(Clone)]
pub struct OracleConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl std::fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleConfig")
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl OracleConfig {
    /// Read `GROQ_API_KEY` and optional `TRUTH_WEAVER_ENDPOINT` from the environment.
    pub fn from_env() -> Result<Self, OracleError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, OracleError> {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR).ok_or(OracleError::MissingApiKey)?;
        let endpoint = non_blank(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Ok(Self {
            api_key: api_key.trim().to_string(),
            endpoint: endpoint.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn key_required() {
        let err = OracleConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, OracleError::MissingApiKey));

        let err = OracleConfig::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, OracleError::MissingApiKey));
    }

    #[test]
    fn default_endpoint() {
        let config = OracleConfig::from_lookup(lookup(&[(API_KEY_VAR, "gsk_test")])).unwrap();
        assert_eq!(config.api_key, "gsk_test");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn endpoint_override() {
        let config = OracleConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (ENDPOINT_VAR, "http://127.0.0.1:8080/v1/chat/completions"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/v1/chat/completions");
    }

    #[test]
    fn debug_hides_key() {
        let config = OracleConfig::from_lookup(lookup(&[(API_KEY_VAR, "gsk_secret")])).unwrap();
        let shown = format!("{config:?}");
        assert!(!shown.contains("gsk_secret"));
        assert!(shown.contains("REDACTED"));
    }
}
