use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z. ]+").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize spoken text: lowercase, keep only `a-z`, `.` and spaces,
/// collapse whitespace.
pub fn clean_line_text(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = DISALLOWED.replace_all(&lower, " ");
    WHITESPACE.replace_all(&kept, " ").trim().to_string()
}

/// Clean a raw transcription file line by line.
///
/// Lines of the form `token: text` keep their token verbatim and get the text
/// normalized (`token:` alone if nothing survives). Blank lines are kept so
/// session separation is unchanged.
pub fn clean_transcript(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for line in raw.lines() {
        if line.trim().is_empty() {
            out.push('\n');
            continue;
        }

        match line.split_once(':') {
            Some((token, rest)) => {
                let cleaned = clean_line_text(rest);
                out.push_str(token);
                out.push(':');
                if !cleaned.is_empty() {
                    out.push(' ');
                    out.push_str(&cleaned);
                }
            }
            None => out.push_str(&clean_line_text(line)),
        }
        out.push('\n');
    }
    out
}
