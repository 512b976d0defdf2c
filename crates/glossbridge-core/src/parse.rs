//! Field extraction for glossary lines of the form `HEAD {PRON} :: TRANSLATION`.

use std::sync::LazyLock;

use regex::Regex;

/// Separator between the headword side and the translation side of a line.
pub const FIELD_SEPARATOR: &str = "::";

static SEE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SEE:\s*(.*?)\s*::").expect("valid SEE pattern"));

/// Headword key: the text before the first `{`, trimmed and lowercased.
///
/// Lines without a `{` have no key and are left out of the index.
pub fn head_key(line: &str) -> Option<String> {
    let (head, _) = line.split_once('{')?;
    Some(head.trim().to_lowercase())
}

/// Target of an embedded `SEE: <target> ::` cross-reference, if any.
pub fn see_target(line: &str) -> Option<&str> {
    let caps = SEE_REFERENCE.captures(line)?;
    let target = caps.get(1)?.as_str().trim();
    (!target.is_empty()).then_some(target)
}

/// Split a line at the first field separator into `(head side, translation side)`.
pub fn split_fields(line: &str) -> Option<(&str, &str)> {
    line.split_once(FIELD_SEPARATOR)
}

/// Text after the first field separator.
pub fn translation_text(line: &str) -> Option<&str> {
    split_fields(line).map(|(_, right)| right)
}

/// Whether the translation side carries at least one ASCII letter.
///
/// Lines without a separator have nothing to reject and pass.
pub fn translation_has_letters(line: &str) -> bool {
    match translation_text(line) {
        Some(right) => right.trim().bytes().any(|b| b.is_ascii_alphabetic()),
        None => true,
    }
}

/// Rewrite `HEAD :: TRANSLATION` as `TRANSLATION :: HEAD`, both sides trimmed.
pub fn swap_sides(line: &str) -> String {
    match split_fields(line) {
        Some((left, right)) => format!("{} {FIELD_SEPARATOR} {}", right.trim(), left.trim()),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_key_is_text_before_brace() {
        assert_eq!(head_key("Cat {kæt} :: chat").as_deref(), Some("cat"));
        assert_eq!(
            head_key("  Ice Cream  {n} :: glace").as_deref(),
            Some("ice cream")
        );
        assert_eq!(head_key("no brace here :: rien"), None);
    }

    #[test]
    fn head_key_uses_first_brace() {
        assert_eq!(head_key("a {b} {c} :: d").as_deref(), Some("a"));
    }

    #[test]
    fn extracts_see_target_case_insensitively() {
        assert_eq!(see_target("colour {n} :: SEE: color ::"), Some("color"));
        assert_eq!(see_target("colour {n} :: see:   color   :: x"), Some("color"));
        assert_eq!(see_target("cat {n} :: chat"), None);
    }

    #[test]
    fn see_without_closing_separator_is_not_a_reference() {
        assert_eq!(see_target("foo {n} :: SEE: bar"), None);
    }

    #[test]
    fn empty_see_target_is_ignored() {
        assert_eq!(see_target("foo {n} :: SEE: ::"), None);
    }

    #[test]
    fn letter_filter_checks_translation_side() {
        assert!(translation_has_letters("cat {n} :: chat"));
        assert!(!translation_has_letters("cat {n} :: /ʃə/ 123"));
        assert!(!translation_has_letters("cat {n} ::   "));
        assert!(translation_has_letters("no separator"));
    }

    #[test]
    fn swaps_sides_around_separator() {
        assert_eq!(swap_sides("cat {n} :: chat"), "chat :: cat {n}");
        assert_eq!(swap_sides("a :: b :: c"), "b :: c :: a");
        assert_eq!(swap_sides("plain"), "plain");
    }
}
