//! Lemmatizers backing the translator's morphological fallback.
//!
//! - [`EnglishLemmatizer`]: classic WordNet morphy. Surface form, `*.exc`
//!   exceptions, then suffix rules, each candidate checked against the lemmas
//!   listed in WordNet's `index.*` files ([`LemmaIndex`]). The shortest noun
//!   and verb roots are reported.
//! - [`FrenchLemmatizer`]: a `form<TAB>lemma` lexicon with suffix rules that
//!   only accept lemmas the lexicon knows.
//!
//! Both implement [`glossbridge_types::Lemmatizer`].
//!
//! # Example
//! ```no_run
//! use glossbridge_morph::{EnglishLemmatizer, LoadMode};
//! use glossbridge_types::Lemmatizer;
//!
//! # fn main() -> anyhow::Result<()> {
//! let english = EnglishLemmatizer::load("/path/to/wordnet", LoadMode::Mmap)?;
//! assert_eq!(english.lemmas("running")[1], "run");
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p glossbridge-morph --example lookup -- <dict> [--demo|<word>]`.

pub mod english;
pub mod french;
pub mod morphy;
pub mod wordnet;

pub use english::EnglishLemmatizer;
pub use french::FrenchLemmatizer;
pub use morphy::{CandidateSource, LemmaCandidate, Morphy};
pub use wordnet::{LemmaIndex, LoadMode};
