use std::path::Path;

use anyhow::Result;
use glossbridge_types::{Language, Lemmatizer, Pos};
use tracing::info;

use crate::morphy::Morphy;
use crate::wordnet::{LemmaIndex, LoadMode};

/// Noun and verb roots for English words, verified against WordNet.
#[derive(Debug, Default)]
pub struct EnglishLemmatizer {
    morphy: Morphy,
    index: LemmaIndex,
}

impl EnglishLemmatizer {
    pub fn new(morphy: Morphy, index: LemmaIndex) -> Self {
        Self { morphy, index }
    }

    /// Load exception lists and lemma indexes from a WordNet dict directory.
    pub fn load(dict_dir: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let dir = dict_dir.as_ref();
        let morphy = Morphy::load(dir)?;
        let index = LemmaIndex::load_with_mode(dir, mode)?;
        info!(
            "wordnet: {} lemmas, {} exceptions from {}",
            index.total(),
            morphy.exception_count(),
            dir.display()
        );
        Ok(Self::new(morphy, index))
    }

    /// Shortest verified lemma for `word` as `pos`, or the word itself.
    pub fn root(&self, pos: Pos, word: &str) -> String {
        self.morphy
            .lemmas_for(pos, word, |p, lemma| self.index.contains(p, lemma))
            .into_iter()
            .min_by_key(|cand| cand.lemma.chars().count())
            .map(|cand| cand.lemma.into_owned())
            .unwrap_or_else(|| word.to_string())
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn language(&self) -> Language {
        Language::English
    }

    fn lemmas(&self, word: &str) -> Vec<String> {
        vec![self.root(Pos::Noun, word), self.root(Pos::Verb, word)]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lemmatizer() -> EnglishLemmatizer {
        let morphy = Morphy::with_exceptions(HashMap::from([
            (
                Pos::Noun,
                HashMap::from([("mice".to_string(), vec!["mouse".to_string()])]),
            ),
            (
                Pos::Verb,
                HashMap::from([("ate".to_string(), vec!["eat".to_string()])]),
            ),
        ]));
        let index = LemmaIndex::from_lemmas([
            (Pos::Noun, "mouse"),
            (Pos::Noun, "dog"),
            (Pos::Noun, "running"),
            (Pos::Verb, "eat"),
            (Pos::Verb, "run"),
            (Pos::Verb, "dog"),
        ]);
        EnglishLemmatizer::new(morphy, index)
    }

    #[test]
    fn returns_noun_then_verb_root() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmas("dogs"), vec!["dog", "dog"]);
        assert_eq!(lem.lemmas("running"), vec!["running", "run"]);
    }

    #[test]
    fn irregular_forms_come_from_exceptions() {
        let lem = lemmatizer();
        assert_eq!(lem.root(Pos::Noun, "mice"), "mouse");
        assert_eq!(lem.root(Pos::Verb, "ate"), "eat");
    }

    #[test]
    fn unknown_words_fall_back_to_themselves() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmas("zzz"), vec!["zzz", "zzz"]);
    }

    #[test]
    fn picks_the_shortest_candidate() {
        let lem = EnglishLemmatizer::new(
            Morphy::default(),
            LemmaIndex::from_lemmas([
                (Pos::Verb, "hoped"),
                (Pos::Verb, "hope"),
                (Pos::Verb, "hop"),
            ]),
        );
        // surface "hoped", then "hope" (ed -> e), then "hop" (ed -> "")
        assert_eq!(lem.root(Pos::Verb, "hoped"), "hop");
    }

    #[test]
    fn plurals_keep_their_double_letter() {
        let lem = EnglishLemmatizer::new(
            Morphy::default(),
            LemmaIndex::from_lemmas([
                (Pos::Noun, "ball"),
                (Pos::Noun, "bal"),
                (Pos::Noun, "cell"),
                (Pos::Noun, "cel"),
            ]),
        );
        assert_eq!(lem.root(Pos::Noun, "balls"), "ball");
        assert_eq!(lem.lemmas("cells"), vec!["cell", "cells"]);
    }
}
