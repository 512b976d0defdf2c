//! Depth-first expansion of `SEE:` cross-references.

use std::collections::HashSet;

use crate::glossary::Glossary;
use crate::parse::see_target;

/// Largest expansion that is inlined in place of a cross-reference line.
///
/// A target with more defining lines than this contributes nothing at all.
pub const MAX_INLINE_LINES: usize = 2;

/// Resolve `key` against `glossary`, following cross-references.
///
/// `visited` is shared by the whole recursion: a key explored anywhere in the
/// chain is never explored again, which also breaks cycles. An unresolvable
/// reference (unknown or already visited target) keeps the referring line.
pub fn resolve<'a>(
    glossary: &'a Glossary,
    key: &str,
    visited: &mut HashSet<String>,
) -> Vec<&'a str> {
    let key = key.to_lowercase();
    if visited.contains(&key) {
        return Vec::new();
    }
    visited.insert(key.clone());

    let mut out = Vec::new();
    for line in glossary.entries(&key) {
        let Some(target) = see_target(line) else {
            out.push(line);
            continue;
        };
        let expanded = resolve(glossary, target, visited);
        if expanded.is_empty() {
            out.push(line);
        } else if expanded.len() <= MAX_INLINE_LINES {
            out.extend(expanded);
        }
    }
    out
}

/// Top-level resolution with a fresh visited set.
pub fn lookup<'a>(glossary: &'a Glossary, key: &str) -> Vec<&'a str> {
    let mut visited = HashSet::new();
    resolve(glossary, key, &mut visited)
}
