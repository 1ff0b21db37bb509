use weaver_core::Batch;

use crate::client::Oracle;
use crate::prompt::render_prompt;

/// Sentinel returned in place of oracle output when the call fails.
/// Reconciles to an empty structured report.
pub const EMPTY_RESULT: &str = "{}";

/// Renders a batch prompt and calls the oracle, absorbing failures.
pub struct OracleAdapter<'a> {
    oracle: &'a dyn Oracle,
}

impl<'a> OracleAdapter<'a> {
    pub fn new(oracle: &'a dyn Oracle) -> Self {
        Self { oracle }
    }

    /// Raw oracle text for `batch`, or [`EMPTY_RESULT`] if the call failed.
    /// Never propagates an error, so one batch cannot abort the run.
    pub fn analyze_batch(&self, batch: &Batch) -> String {
        let prompt = render_prompt(batch);
        match self.oracle.analyze(&prompt) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::error!(group_id = %batch.group_id, error = %e, "oracle call failed");
                EMPTY_RESULT.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedOracle;
    use crate::test_log::capture_logs;
    use weaver_core::SessionRecord;

    fn batch(group_id: &str) -> Batch {
        Batch {
            group_id: group_id.into(),
            sessions: vec![SessionRecord::new("g_1.mp3", "I built compilers")],
        }
    }

    #[test]
    fn passes_rendered_prompt_and_returns_text() {
        let oracle = ScriptedOracle::new();
        oracle.push_ok("  {\"shadow_id\":\"g_1\"}\n");
        let adapter = OracleAdapter::new(&oracle);

        let out = adapter.analyze_batch(&batch("g_1"));
        assert_eq!(out, "{\"shadow_id\":\"g_1\"}");

        let prompts = oracle.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], render_prompt(&batch("g_1")));
    }

    #[test]
    fn failure_becomes_empty_object() {
        let oracle = ScriptedOracle::new();
        oracle.push_err("connection reset");
        let adapter = OracleAdapter::new(&oracle);
        assert_eq!(adapter.analyze_batch(&batch("g_1")), EMPTY_RESULT);
    }

    #[test]
    fn closure_oracle_works_through_adapter() {
        let oracle = |prompt: &str| -> Result<String, crate::OracleError> {
            Ok(prompt.contains("ANALYSIS TARGET: zed_4").to_string())
        };
        let adapter = OracleAdapter::new(&oracle);
        assert_eq!(adapter.analyze_batch(&batch("zed_4")), "true");
    }

    #[test]
    fn failure_is_logged_with_group_id() {
        let oracle = ScriptedOracle::new();
        oracle.push_err("connection reset");
        let adapter = OracleAdapter::new(&oracle);

        let (out, logs) = capture_logs(|| adapter.analyze_batch(&batch("kim_3")));
        assert_eq!(out, EMPTY_RESULT);
        assert!(logs.contains("ERROR"), "{logs}");
        assert!(logs.contains("oracle call failed"), "{logs}");
        assert!(logs.contains("group_id=kim_3"), "{logs}");
        assert!(logs.contains("connection reset"), "{logs}");
    }
}
