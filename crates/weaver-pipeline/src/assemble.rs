use std::path::Path;

use weaver_core::{reconcile, Report};
use weaver_store::StoreError;

/// Accumulates one result per processed batch, in processing order.
#[derive(Debug, Default)]
pub struct ReportAssembler {
    report: Report,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile raw oracle output for `group_id` and record it.
    /// Returns whether the output parsed as a structured report.
    pub fn record(&mut self, group_id: &str, raw_output: &str) -> bool {
        let result = reconcile(group_id, raw_output);
        let structured = result.is_structured();
        if structured {
            tracing::info!(group_id, "analysis parsed");
        }
        self.report.insert(group_id, result);
        structured
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_report(self) -> Report {
        self.report
    }
}

/// Write the report to `output` as indented JSON and log the outcome.
pub fn persist_report(report: &Report, output: &Path) -> Result<(), StoreError> {
    match weaver_store::write_json_pretty(output, report) {
        Ok(()) => {
            tracing::info!(
                groups = report.len(),
                path = %output.display(),
                "saved all analysis"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(path = %output.display(), error = %e, "error saving report");
            Err(e)
        }
    }
}
