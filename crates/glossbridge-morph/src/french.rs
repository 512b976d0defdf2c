use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use glossbridge_types::{Language, Lemmatizer};
use tracing::{info, warn};

/// Inflectional endings tried when a form is not in the lexicon, in order.
/// A rewrite only counts if it lands on a lemma the lexicon knows.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("eaux", "eau"),
    ("aux", "al"),
    ("s", ""),
    ("x", ""),
    ("es", ""),
    ("e", ""),
    ("ées", "er"),
    ("és", "er"),
    ("ée", "er"),
    ("é", "er"),
    ("ons", "er"),
    ("ez", "er"),
    ("ent", "er"),
    ("ais", "er"),
    ("ait", "er"),
    ("aient", "er"),
    ("ant", "er"),
    ("erai", "er"),
    ("era", "er"),
    ("eront", "er"),
    ("issons", "ir"),
    ("issez", "ir"),
    ("issent", "ir"),
    ("is", "ir"),
    ("it", "ir"),
    ("ie", "ir"),
    ("i", "ir"),
    ("ons", "re"),
    ("ez", "re"),
    ("ent", "re"),
    ("ue", "re"),
    ("u", "re"),
];

/// Lexicon-backed French lemmatizer.
///
/// The lexicon is a tab-separated `form<TAB>lemma` file; `#` starts a comment.
#[derive(Debug, Default)]
pub struct FrenchLemmatizer {
    forms: HashMap<String, String>,
    lemmas: HashSet<String>,
}

impl FrenchLemmatizer {
    /// Load a lexicon file. A missing file gives an empty lexicon.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("french lexicon {} not found", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                let context = format!("open lexicon {}", path.display());
                return Err(anyhow::Error::new(err).context(context));
            }
        };

        let mut pairs = Vec::new();
        for (lineno, line) in BufReader::new(file).lines().enumerate() {
            let line =
                line.with_context(|| format!("read line {} in {}", lineno + 1, path.display()))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((form, lemma)) = line.split_once('\t') else {
                warn!("{}:{} has no tab, skipped", path.display(), lineno + 1);
                continue;
            };
            pairs.push((form.to_string(), lemma.to_string()));
        }

        let lexicon = Self::from_pairs(pairs);
        info!(
            "french lexicon: {} forms, {} lemmas from {}",
            lexicon.forms.len(),
            lexicon.lemmas.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Build from `(form, lemma)` pairs; the first lemma listed for a form wins.
    pub fn from_pairs<I, F, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let mut forms = HashMap::new();
        let mut lemmas = HashSet::new();
        for (form, lemma) in pairs {
            let form = form.as_ref().trim().to_lowercase();
            let lemma = lemma.as_ref().trim().to_lowercase();
            if form.is_empty() || lemma.is_empty() {
                continue;
            }
            lemmas.insert(lemma.clone());
            forms.entry(form).or_insert(lemma);
        }
        Self { forms, lemmas }
    }

    /// Single most likely lemma for `word`, if the lexicon can vouch for one.
    pub fn best_lemma(&self, word: &str) -> Option<String> {
        let word = word.trim().to_lowercase();
        if let Some(lemma) = self.forms.get(&word) {
            return Some(lemma.clone());
        }
        if self.lemmas.contains(&word) {
            return Some(word);
        }
        SUFFIX_RULES.iter().find_map(|(suffix, replacement)| {
            let stem = word.strip_suffix(suffix)?;
            if stem.is_empty() {
                return None;
            }
            let candidate = format!("{stem}{replacement}");
            self.lemmas.contains(&candidate).then_some(candidate)
        })
    }
}

impl Lemmatizer for FrenchLemmatizer {
    fn language(&self) -> Language {
        Language::French
    }

    fn lemmas(&self, word: &str) -> Vec<String> {
        self.best_lemma(word).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use tempfile::NamedTempFile;

    fn lexicon() -> FrenchLemmatizer {
        FrenchLemmatizer::from_pairs([
            ("chevaux", "cheval"),
            ("yeux", "œil"),
            ("yeux", "oeil"),
            ("manger", "manger"),
            ("finir", "finir"),
            ("chat", "chat"),
            ("journal", "journal"),
        ])
    }

    #[test]
    fn lexicon_forms_win() {
        let lex = lexicon();
        assert_eq!(lex.best_lemma("Chevaux").as_deref(), Some("cheval"));
        assert_eq!(lex.best_lemma("yeux").as_deref(), Some("œil"));
    }

    #[test]
    fn suffix_rules_must_land_on_known_lemmas() {
        let lex = lexicon();
        assert_eq!(lex.best_lemma("mangeons").as_deref(), Some("manger"));
        assert_eq!(lex.best_lemma("finissons").as_deref(), Some("finir"));
        assert_eq!(lex.best_lemma("chats").as_deref(), Some("chat"));
        assert_eq!(lex.best_lemma("journaux").as_deref(), Some("journal"));
        assert_eq!(lex.best_lemma("parlons"), None);
    }

    #[test]
    fn nothing_usable_yields_no_lemmas() {
        assert!(lexicon().lemmas("zzz").is_empty());
        assert_eq!(lexicon().lemmas("chat"), vec!["chat"]);
    }

    #[test]
    fn loads_tab_separated_lexicon() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "# form\tlemma").unwrap();
        writeln!(file, "mangeait\tmanger").unwrap();
        writeln!(file, "broken line").unwrap();
        writeln!(file).unwrap();
        let lex = FrenchLemmatizer::load(file.path()).unwrap();
        assert_eq!(lex.best_lemma("mangeait").as_deref(), Some("manger"));
        assert_eq!(lex.best_lemma("mangent").as_deref(), Some("manger"));
    }

    #[test]
    fn missing_lexicon_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let lex = FrenchLemmatizer::load(dir.path().join("lexicon.tsv")).unwrap();
        assert_eq!(lex.best_lemma("chats"), None);
    }
}
