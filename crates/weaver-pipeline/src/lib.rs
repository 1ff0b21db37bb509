mod assemble;

use std::path::{Path, PathBuf};

use weaver_core::{batch_sessions, segment_sessions, Batch, BatchPlan, Report, BATCH_SIZE};
use weaver_oracle::{Oracle, OracleAdapter};
use weaver_store::StoreError;

pub use assemble::{persist_report, ReportAssembler};

/// Why a run produced no groups before reaching the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortfall {
    /// The input document could not be read.
    Unreadable,
    /// The input document is empty or whitespace only.
    Empty,
    /// The document has text but no session header lines.
    NoSessions,
}

/// Sessions of the input document, already batched.
#[derive(Debug)]
pub enum Loaded {
    Batches(BatchPlan),
    Shortfall(Shortfall),
}

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Everything analyzed, even when persisting it failed.
    pub report: Report,
    /// Unit ids of the trailing partial batch that was skipped.
    pub dropped: Vec<String>,
    pub shortfall: Option<Shortfall>,
    /// Set when the report was written.
    pub written_to: Option<PathBuf>,
    pub persist_error: Option<StoreError>,
}

/// Read, segment, and batch `input`. Input problems are logged and reported
/// as a [`Shortfall`], never as an error.
pub fn load_batches(input: &Path) -> Loaded {
    let document = match weaver_store::read_document(input) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::error!(error = %e, "cannot load transcript");
            return Loaded::Shortfall(Shortfall::Unreadable);
        }
    };
    if document.trim().is_empty() {
        tracing::error!(path = %input.display(), "transcript is empty");
        return Loaded::Shortfall(Shortfall::Empty);
    }

    let sessions = segment_sessions(&document);
    if sessions.is_empty() {
        tracing::error!(path = %input.display(), "no sessions found");
        return Loaded::Shortfall(Shortfall::NoSessions);
    }
    tracing::info!(sessions = sessions.len(), path = %input.display(), "segmented transcript");

    Loaded::Batches(batch_sessions(sessions, BATCH_SIZE))
}

/// Analyze batches one at a time, in order. A failing batch degrades to an
/// empty or raw result and the loop moves on.
pub fn analyze_batches(batches: &[Batch], oracle: &dyn Oracle) -> Report {
    let adapter = OracleAdapter::new(oracle);
    let mut assembler = ReportAssembler::new();
    let total = batches.len();

    for (i, batch) in batches.iter().enumerate() {
        tracing::info!(
            group_id = %batch.group_id,
            units = ?batch.unit_ids(),
            "analyzing group {}/{total}",
            i + 1
        );
        let raw = adapter.analyze_batch(batch);
        assembler.record(&batch.group_id, &raw);
    }

    assembler.into_report()
}

/// Run the whole pipeline: load `input`, analyze every full batch, and write
/// the report to `output`.
///
/// Nothing is written when the input yields no sessions. A write failure is
/// returned in [`RunOutcome::persist_error`] alongside the in-memory report.
pub fn run(input: &Path, output: &Path, oracle: &dyn Oracle) -> RunOutcome {
    let plan = match load_batches(input) {
        Loaded::Batches(plan) => plan,
        Loaded::Shortfall(shortfall) => {
            return RunOutcome {
                report: Report::new(),
                dropped: Vec::new(),
                shortfall: Some(shortfall),
                written_to: None,
                persist_error: None,
            }
        }
    };

    let report = analyze_batches(&plan.batches, oracle);

    let (written_to, persist_error) = match persist_report(&report, output) {
        Ok(()) => (Some(output.to_path_buf()), None),
        Err(e) => (None, Some(e)),
    };

    RunOutcome {
        report,
        dropped: plan.dropped,
        shortfall: None,
        written_to,
        persist_error,
    }
}
