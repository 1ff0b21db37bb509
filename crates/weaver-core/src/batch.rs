use std::num::NonZeroUsize;

use crate::model::{Batch, SessionRecord};

/// Number of consecutive sessions analyzed together as one group.
pub const BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Result of partitioning sessions into full batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    pub batches: Vec<Batch>,
    /// Unit ids of the trailing partial window, in order. Empty when the
    /// session count is a multiple of the batch size.
    pub dropped: Vec<String>,
}

/// Subject identity of a unit id: everything before the first `_`,
/// or the whole id when it has none.
pub fn subject_prefix(unit_id: &str) -> &str {
    unit_id.split('_').next().unwrap_or(unit_id)
}

/// Partition `sessions` into consecutive windows of exactly `size` records.
///
/// Each batch gets `group_id = <subject prefix of its first unit>_<1-based index>`.
/// A trailing window shorter than `size` is dropped and logged at WARN; it is
/// never analyzed.
pub fn batch_sessions(sessions: Vec<SessionRecord>, size: NonZeroUsize) -> BatchPlan {
    let size = size.get();
    let full = sessions.len() / size * size;

    let mut sessions = sessions;
    let remainder = sessions.split_off(full);
    let dropped: Vec<String> = remainder.into_iter().map(|s| s.unit_id).collect();
    if !dropped.is_empty() {
        tracing::warn!(
            dropped = ?dropped,
            "skipping incomplete batch of {} session(s)",
            dropped.len()
        );
    }

    let mut batches = Vec::with_capacity(full / size);
    let mut iter = sessions.into_iter();
    let mut index = 1usize;
    loop {
        let window: Vec<SessionRecord> = iter.by_ref().take(size).collect();
        if window.is_empty() {
            break;
        }
        let group_id = format!("{}_{index}", subject_prefix(&window[0].unit_id));
        batches.push(Batch {
            group_id,
            sessions: window,
        });
        index += 1;
    }

    BatchPlan { batches, dropped }
}
