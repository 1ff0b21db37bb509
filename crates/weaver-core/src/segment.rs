use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::SessionRecord;

/// A session header: a token with no whitespace or colon at line start,
/// followed by `:` and then a space, tab, or line end.
static SESSION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([^\s:]+):(?:[ \t\r]|$)").unwrap());

/// Split an aggregated transcript into ordered session records.
///
/// Each session runs from its header line up to the next header (or EOF),
/// so content may span several lines including blank ones. Content is
/// trimmed at the edges only. Text before the first header is ignored.
///
/// Returns an empty vec when the document has no header lines.
pub fn segment_sessions(document: &str) -> Vec<SessionRecord> {
    let headers: Vec<(String, usize, usize)> = SESSION_HEADER
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let token = caps.get(1)?;
            Some((token.as_str().to_string(), whole.start(), whole.end()))
        })
        .collect();

    if let Some((_, first_start, _)) = headers.first() {
        if !document[..*first_start].trim().is_empty() {
            tracing::debug!(
                bytes = *first_start,
                "ignoring text before the first session header"
            );
        }
    }

    let mut seen = HashSet::new();
    let mut sessions = Vec::with_capacity(headers.len());
    for (i, (unit_id, _, body_start)) in headers.iter().enumerate() {
        let body_end = headers
            .get(i + 1)
            .map(|(_, next_start, _)| *next_start)
            .unwrap_or(document.len());

        if !seen.insert(unit_id.as_str()) {
            tracing::warn!(unit_id = %unit_id, "duplicate session identifier");
        }

        sessions.push(SessionRecord::new(
            unit_id.clone(),
            document[*body_start..body_end].trim(),
        ));
    }
    sessions
}
