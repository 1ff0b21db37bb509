use std::path::Path;

use anyhow::Context;

/// `truth-weaver clean`
pub fn execute(input: &Path, output: &Path) -> anyhow::Result<()> {
    let raw = weaver_store::read_document(input)?;
    let cleaned = weaver_core::clean_transcript(&raw);
    weaver_store::write_atomic(output, cleaned.as_bytes())
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(
        lines = cleaned.lines().count(),
        path = %output.display(),
        "cleaned transcript"
    );
    println!("Cleaned file written to: {}", output.display());
    Ok(())
}
