//! Display cleanup and first-seen deduplication of result lines.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static PHONETIC_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/[^/]+/").expect("valid phonetic pattern"));
static BRACE_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}\s+").expect("valid brace pattern"));

/// Remove every `/.../` pronunciation span.
///
/// Removal can join two stray slashes into a new span (`//a/b/`), so this
/// repeats until nothing matches.
pub fn strip_phonetics(text: &str) -> String {
    let mut out = PHONETIC_SPAN.replace_all(text, "").into_owned();
    while PHONETIC_SPAN.is_match(&out) {
        out = PHONETIC_SPAN.replace_all(&out, "").into_owned();
    }
    out
}

/// Collapse whitespace after a closing brace to a single space.
pub fn collapse_brace_gap(text: &str) -> String {
    BRACE_GAP.replace_all(text, "} ").into_owned()
}

pub fn normalize_line(text: &str) -> String {
    collapse_brace_gap(&strip_phonetics(text))
}

/// Normalize each line and keep the first occurrence of each distinct result.
///
/// Lines are compared on their trimmed normalized form; the kept line is the
/// normalized text itself.
pub fn dedup_normalized<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for line in lines {
        let normalized = normalize_line(line.as_ref());
        if seen.insert(normalized.trim().to_string()) {
            out.push(normalized);
        }
    }
    out
}
