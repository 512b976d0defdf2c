//! Translation engine over a pair of flat bilingual glossaries.
//!
//! Each glossary line has the shape `HEAD {PRON} :: TRANSLATION`. A
//! [`Glossary`] keeps the raw lines and indexes them by lowercased headword.
//! [`Translator`] looks a word up in both directions, follows `SEE:`
//! cross-references, retries with lemma candidates, and only when all of that
//! finds nothing falls back to scanning translation text.
//!
//! ```rust
//! use std::sync::Arc;
//! use glossbridge_core::{Glossary, Translator};
//!
//! let en_fr = Arc::new(Glossary::from_lines(["cat {kæt} :: chat"]));
//! let fr_en = Arc::new(Glossary::from_lines(["chat {ʃa} :: cat"]));
//! let translator = Translator::without_morphology(en_fr, fr_en);
//! assert_eq!(translator.translate("the cat"), "Translation not found.");
//! assert_eq!(translator.translate("Cat"), "EN -> FR: cat {kæt} :: chat");
//! ```

pub mod glossary;
pub mod normalize;
pub mod parse;
pub mod resolve;
pub mod reverse;
pub mod translate;

pub use glossary::{Glossary, GlossaryError, load_lines};
pub use resolve::{MAX_INLINE_LINES, lookup, resolve};
pub use reverse::reverse_scan;
pub use translate::{NOT_FOUND, ResultLine, Translator, clean_input, lemma_candidates};
