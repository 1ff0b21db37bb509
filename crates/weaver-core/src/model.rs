use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One transcribed session, tagged by the token that introduced it
/// (e.g. `alice_3.mp3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub unit_id: String,
    pub content: String,
}

impl SessionRecord {
    pub fn new(unit_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            unit_id: unit_id.into(),
            content: content.into(),
        }
    }
}

/// A full window of consecutive sessions analyzed together.
///
/// Only constructed by [`crate::batch_sessions`], so `sessions.len()` always
/// equals the batch size used for that run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub group_id: String,
    pub sessions: Vec<SessionRecord>,
}

impl Batch {
    pub fn unit_ids(&self) -> Vec<&str> {
        self.sessions.iter().map(|s| s.unit_id.as_str()).collect()
    }
}

/// Outcome of reconciling one oracle response.
///
/// Serializes untagged: a structured report is written as the oracle's own
/// object, a raw capture as `{"raw_output": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Structured(serde_json::Map<String, serde_json::Value>),
    Raw { raw_output: String },
}

impl AnalysisResult {
    pub fn is_structured(&self) -> bool {
        matches!(self, AnalysisResult::Structured(_))
    }

    pub fn as_structured(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            AnalysisResult::Structured(map) => Some(map),
            AnalysisResult::Raw { .. } => None,
        }
    }

    pub fn raw_output(&self) -> Option<&str> {
        match self {
            AnalysisResult::Raw { raw_output } => Some(raw_output.as_str()),
            AnalysisResult::Structured(_) => None,
        }
    }
}

/// Per-group results in batch-processing order. Serializes as a JSON object
/// whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    entries: Vec<(String, AnalysisResult)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result. Re-inserting an existing group replaces its value in place.
    pub fn insert(&mut self, group_id: impl Into<String>, result: AnalysisResult) {
        let group_id = group_id.into();
        match self.entries.iter_mut().find(|(k, _)| *k == group_id) {
            Some((_, existing)) => *existing = result,
            None => self.entries.push((group_id, result)),
        }
    }

    pub fn get(&self, group_id: &str) -> Option<&AnalysisResult> {
        self.entries
            .iter()
            .find(|(k, _)| k == group_id)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnalysisResult)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (group_id, result) in &self.entries {
            map.serialize_entry(group_id, result)?;
        }
        map.end()
    }
}
