mod batch;
mod clean;
mod model;
mod reconcile;
mod segment;

#[cfg(test)]
mod test_log;

pub use batch::{batch_sessions, subject_prefix, BatchPlan, BATCH_SIZE};
pub use clean::{clean_line_text, clean_transcript};
pub use model::{AnalysisResult, Batch, Report, SessionRecord};
pub use reconcile::{reconcile, strip_code_fences};
pub use segment::segment_sessions;
