use std::fmt;
use std::sync::Arc;

use glossbridge_types::{Direction, IdentityLemmatizer, Language, Lemmatizer};
use tracing::debug;

use crate::glossary::Glossary;
use crate::normalize::dedup_normalized;
use crate::parse::{swap_sides, translation_has_letters};
use crate::resolve::lookup;
use crate::reverse::reverse_scan;

/// Returned by [`Translator::translate`] when nothing matched.
pub const NOT_FOUND: &str = "Translation not found.";

const VERB_MARKER: &str = "to ";

/// Leading articles removed from the input, checked in this order.
pub const ARTICLES: [&str; 4] = ["le ", "la ", "les ", "l'"];

/// Trim and lowercase the input, then drop a leading `to ` and one article.
pub fn clean_input(word: &str) -> String {
    let mut cleaned = word.trim().to_lowercase();
    if let Some(rest) = cleaned.strip_prefix(VERB_MARKER) {
        cleaned = rest.to_string();
    }
    if let Some(rest) = ARTICLES.iter().find_map(|a| cleaned.strip_prefix(a)) {
        cleaned = rest.to_string();
    }
    cleaned
}

/// The word itself followed by the lemmatizer's roots, without repeats.
pub fn lemma_candidates(lemmatizer: &dyn Lemmatizer, word: &str) -> Vec<String> {
    let mut out = vec![word.to_string()];
    for lemma in lemmatizer.lemmas(word) {
        if !lemma.is_empty() && !out.contains(&lemma) {
            out.push(lemma);
        }
    }
    out
}

/// A glossary line tagged with the direction it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub direction: Direction,
    pub text: String,
}

impl ResultLine {
    pub fn new(direction: Direction, text: impl Into<String>) -> Self {
        Self {
            direction,
            text: text.into(),
        }
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.direction.label(), self.text)
    }
}

/// End-to-end word to translation pipeline over both glossaries.
///
/// Holds only shared read-only data, so one instance serves every request.
#[derive(Clone)]
pub struct Translator {
    en_fr: Arc<Glossary>,
    fr_en: Arc<Glossary>,
    english: Arc<dyn Lemmatizer>,
    french: Arc<dyn Lemmatizer>,
}

impl Translator {
    pub fn new(
        en_fr: Arc<Glossary>,
        fr_en: Arc<Glossary>,
        english: Arc<dyn Lemmatizer>,
        french: Arc<dyn Lemmatizer>,
    ) -> Self {
        Self {
            en_fr,
            fr_en,
            english,
            french,
        }
    }

    /// Translator that only does direct and cross-reference lookups.
    pub fn without_morphology(en_fr: Arc<Glossary>, fr_en: Arc<Glossary>) -> Self {
        Self::new(
            en_fr,
            fr_en,
            Arc::new(IdentityLemmatizer(Language::English)),
            Arc::new(IdentityLemmatizer(Language::French)),
        )
    }

    pub fn glossary(&self, direction: Direction) -> &Glossary {
        match direction {
            Direction::EnFr => &self.en_fr,
            Direction::FrEn => &self.fr_en,
        }
    }

    fn lemmatizer(&self, language: Language) -> &dyn Lemmatizer {
        match language {
            Language::English => self.english.as_ref(),
            Language::French => self.french.as_ref(),
        }
    }

    /// Guess the input language from headword membership, English first.
    pub fn detect_language(&self, cleaned: &str) -> Language {
        if self.en_fr.contains_key(cleaned) {
            Language::English
        } else if self.fr_en.contains_key(cleaned) {
            Language::French
        } else {
            Language::English
        }
    }

    /// Normalized, deduplicated result lines for `word`, possibly empty.
    pub fn lookup(&self, word: &str) -> Vec<String> {
        let cleaned = clean_input(word);
        if cleaned.is_empty() {
            return Vec::new();
        }
        let input_language = self.detect_language(&cleaned);

        let mut results = self.forward_matches(&cleaned);
        let forward_count = results.len();
        if results.is_empty() {
            results = self.reverse_matches(&cleaned, input_language);
        }
        debug!(
            word = %cleaned,
            language = input_language.code(),
            forward = forward_count,
            reverse = forward_count == 0,
            total = results.len(),
            "resolved lookup"
        );

        dedup_normalized(results.iter().map(ToString::to_string))
    }

    /// Newline-joined result block, or [`NOT_FOUND`].
    pub fn translate(&self, word: &str) -> String {
        let lines = self.lookup(word);
        if lines.is_empty() {
            NOT_FOUND.to_string()
        } else {
            lines.join("\n")
        }
    }

    fn forward_matches(&self, cleaned: &str) -> Vec<ResultLine> {
        let mut results = Vec::new();
        for direction in [Direction::EnFr, Direction::FrEn] {
            results.extend(self.resolve_tagged(direction, cleaned));
        }

        for direction in [Direction::EnFr, Direction::FrEn] {
            let lemmatizer = self.lemmatizer(direction.source());
            for candidate in lemma_candidates(lemmatizer, cleaned) {
                for line in self.resolve_tagged(direction, &candidate) {
                    if !results.contains(&line) {
                        results.push(line);
                    }
                }
            }
        }
        results
    }

    fn resolve_tagged(&self, direction: Direction, key: &str) -> Vec<ResultLine> {
        lookup(self.glossary(direction), key)
            .into_iter()
            .filter(|line| translation_has_letters(line))
            .map(|line| ResultLine::new(direction, line))
            .collect()
    }

    /// Translation-side matches from both glossaries, shown swapped.
    ///
    /// Every match is labelled with the direction of the detected input
    /// language, whichever glossary it was found in.
    fn reverse_matches(&self, cleaned: &str, input_language: Language) -> Vec<ResultLine> {
        let label = Direction::from_source(input_language);
        [Direction::EnFr, Direction::FrEn]
            .into_iter()
            .flat_map(|direction| reverse_scan(self.glossary(direction), cleaned))
            .filter(|line| translation_has_letters(line))
            .map(|line| ResultLine::new(label, swap_sides(line)))
            .collect()
    }
}
