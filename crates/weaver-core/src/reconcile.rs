use crate::model::AnalysisResult;

const FENCE: &str = "```";

/// Remove a Markdown code fence wrapped around model output.
///
/// Strips an opening fence at the start, together with its language tag
/// (such as `json`) when the tag is alone on that line, and a closing fence at
/// the end. Either side may be missing. Text without fences is returned
/// trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        // a language tag only counts when it is alone on the fence line
        text = match rest.split_once('\n') {
            Some((first_line, after)) if is_fence_tag(first_line.trim()) => after.trim_start(),
            _ => rest.trim_start(),
        };
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest.trim_end();
    }

    text
}

fn is_fence_tag(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Turn one oracle response into an analysis result.
///
/// Output that parses as a JSON object becomes [`AnalysisResult::Structured`]
/// with no further schema checks. Anything else (prose, truncated JSON, a bare
/// array or scalar) is logged and kept verbatim, after fence stripping, as
/// [`AnalysisResult::Raw`].
pub fn reconcile(group_id: &str, raw: &str) -> AnalysisResult {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<serde_json::Value>(cleaned) {
        Ok(serde_json::Value::Object(map)) => AnalysisResult::Structured(map),
        Ok(other) => {
            tracing::error!(
                group_id,
                kind = json_kind(&other),
                "oracle output is JSON but not an object"
            );
            tracing::error!(group_id, raw_output = cleaned, "raw oracle output after cleanup");
            AnalysisResult::Raw {
                raw_output: cleaned.to_string(),
            }
        }
        Err(e) => {
            tracing::error!(group_id, error = %e, "JSON decoding failed");
            tracing::error!(group_id, raw_output = cleaned, "raw oracle output after cleanup");
            AnalysisResult::Raw {
                raw_output: cleaned.to_string(),
            }
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
