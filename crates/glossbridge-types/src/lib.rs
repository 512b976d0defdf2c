//! Shared vocabulary for the glossbridge workspace.
//!
//! The translation engine works over a fixed language pair (English, French)
//! and two glossary files, one per [`Direction`]. Morphological analysis is a
//! pluggable collaborator described by the [`Lemmatizer`] trait so the core
//! never depends on a concrete analyzer.
//!
//! ```rust
//! use glossbridge_types::{Direction, Language, Pos};
//!
//! assert_eq!(Direction::from_source(Language::French).label(), "FR -> EN");
//! assert_eq!(Pos::from_char('v'), Some(Pos::Verb));
//! ```

use std::fmt;

/// One side of the supported language pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    English,
    French,
}

impl Language {
    /// Two-letter language code, as logged by the translator.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::French => "FR",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::English => Language::French,
            Language::French => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "english",
            Language::French => "french",
        })
    }
}

/// Which glossary a result came from, named by its headword language.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    EnFr,
    FrEn,
}

impl Direction {
    pub fn from_source(source: Language) -> Self {
        match source {
            Language::English => Direction::EnFr,
            Language::French => Direction::FrEn,
        }
    }

    /// Language of the headwords in this direction's glossary.
    pub fn source(self) -> Language {
        match self {
            Direction::EnFr => Language::English,
            Direction::FrEn => Language::French,
        }
    }

    pub fn target(self) -> Language {
        self.source().other()
    }

    /// Display tag prefixed to every result line, e.g. `EN -> FR`.
    pub fn label(self) -> &'static str {
        match self {
            Direction::EnFr => "EN -> FR",
            Direction::FrEn => "FR -> EN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Part-of-speech marker as used by WordNet files (`n`, `v`, `a`/`s`, `r`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl Pos {
    /// Parse a WordNet POS character into an enum.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Pos::Noun),
            'v' => Some(Pos::Verb),
            'a' | 's' => Some(Pos::Adj),
            'r' => Some(Pos::Adv),
            _ => None,
        }
    }

    /// Emit the POS character used in `index.*`/`data.*`.
    pub fn to_char(self) -> char {
        match self {
            Pos::Noun => 'n',
            Pos::Verb => 'v',
            Pos::Adj => 'a',
            Pos::Adv => 'r',
        }
    }

    /// Suffix of the WordNet file names for this POS (`index.noun`, `noun.exc`).
    pub fn file_stem(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adj => "adj",
            Pos::Adv => "adv",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Morphological analyzer for one language.
///
/// Implementations return candidate root forms only; callers add the surface
/// word themselves. An empty result means the analyzer had nothing usable.
pub trait Lemmatizer: Send + Sync {
    fn language(&self) -> Language;

    fn lemmas(&self, word: &str) -> Vec<String>;
}

/// Lemmatizer that never proposes a root, for when no morphology data is set up.
#[derive(Clone, Copy, Debug)]
pub struct IdentityLemmatizer(pub Language);

impl Lemmatizer for IdentityLemmatizer {
    fn language(&self) -> Language {
        self.0
    }

    fn lemmas(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}
