//! Last-resort search over the translation side of every raw line.

use crate::glossary::Glossary;
use crate::parse::translation_text;

/// Lines whose translation side contains `phrase`, compared case-insensitively.
///
/// This is a linear scan over all loaded lines, indexed or not.
pub fn reverse_scan<'a>(glossary: &'a Glossary, phrase: &str) -> Vec<&'a str> {
    let needle = phrase.to_lowercase();
    glossary
        .lines()
        .iter()
        .map(String::as_str)
        .filter(|line| {
            translation_text(line).is_some_and(|right| right.to_lowercase().contains(&needle))
        })
        .collect()
}
