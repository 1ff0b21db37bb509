use std::path::Path;

use anyhow::Context;
use weaver_oracle::{ChatCompletionsOracle, OracleConfig};
use weaver_pipeline::{RunOutcome, Shortfall};

/// `truth-weaver analyze`
pub fn execute(input: &Path, output: &Path) -> anyhow::Result<()> {
    let config = OracleConfig::from_env().context("oracle configuration")?;
    let oracle = ChatCompletionsOracle::new(&config);

    let outcome = weaver_pipeline::run(input, output, &oracle);
    println!("{}", summary(&outcome, input));

    match outcome.persist_error {
        Some(e) => Err(e).with_context(|| format!("saving report to {}", output.display())),
        None => Ok(()),
    }
}

fn summary(outcome: &RunOutcome, input: &Path) -> String {
    if let Some(shortfall) = outcome.shortfall {
        let reason = match shortfall {
            Shortfall::Unreadable => "could not be read",
            Shortfall::Empty => "is empty",
            Shortfall::NoSessions => "has no sessions",
        };
        return format!("No groups analyzed: {} {reason}", input.display());
    }

    let mut lines = Vec::new();
    match &outcome.written_to {
        Some(path) => lines.push(format!(
            "Analyzed {} group(s) -> {}",
            outcome.report.len(),
            path.display()
        )),
        None => lines.push(format!(
            "Analyzed {} group(s), report not saved",
            outcome.report.len()
        )),
    }
    let raw = outcome
        .report
        .iter()
        .filter(|(_, r)| !r.is_structured())
        .count();
    if raw > 0 {
        lines.push(format!("  {raw} group(s) kept as raw output"));
    }
    if !outcome.dropped.is_empty() {
        lines.push(format!(
            "  Skipped incomplete batch: {}",
            outcome.dropped.join(", ")
        ));
    }
    lines.join("\n")
}
