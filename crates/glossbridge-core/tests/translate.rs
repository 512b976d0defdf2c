use std::path::PathBuf;
use std::sync::Arc;

use glossbridge_core::{Glossary, NOT_FOUND, Translator};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn translator() -> Translator {
    let en_fr = Glossary::load(fixture("en-fr.txt")).expect("load en-fr");
    let fr_en = Glossary::load(fixture("fr-en.txt")).expect("load fr-en");
    Translator::without_morphology(en_fr, fr_en)
}

#[test]
fn indexes_fixture_headwords() {
    let en_fr = Glossary::load(fixture("en-fr.txt")).unwrap();
    assert_eq!(en_fr.len(), 9);
    assert_eq!(en_fr.entries("cat").count(), 2);
    assert!(!en_fr.contains_key("# english"));
}

#[test]
fn english_word_lists_every_sense_without_phonetics() {
    assert_eq!(
        translator().translate("cat"),
        "EN -> FR: cat {n} :: chat {m}\nEN -> FR: cat {n} :: chatte {f}"
    );
}

#[test]
fn verb_marker_and_article_are_ignored() {
    let t = translator();
    assert_eq!(t.translate("To eat"), "EN -> FR: eat {v} :: manger");
    assert_eq!(t.translate("L'eau"), "FR -> EN: eau {f} :: water");
}

#[test]
fn cross_references_are_followed_in_both_glossaries() {
    let t = translator();
    assert_eq!(t.translate("colour"), "EN -> FR: color {n} :: couleur {f}");
    assert_eq!(t.translate("mangeons"), "FR -> EN: manger {v} :: to eat");
}

#[test]
fn translation_side_is_searched_as_a_last_resort() {
    assert_eq!(
        translator().translate("couleur"),
        "EN -> FR: couleur {f} :: color {n} "
    );
}

#[test]
fn numeric_only_entries_are_not_translations() {
    assert_eq!(translator().translate("one"), NOT_FOUND);
}

#[test]
fn unknown_word_is_not_found() {
    assert_eq!(translator().translate("zzznotaword"), NOT_FOUND);
}

#[test]
fn missing_glossaries_degrade_to_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let en_fr = Glossary::load(dir.path().join("en-fr.txt")).unwrap();
    let fr_en = Glossary::load(dir.path().join("fr-en.txt")).unwrap();
    let t = Translator::without_morphology(en_fr, Arc::clone(&fr_en));
    assert!(fr_en.is_empty());
    assert_eq!(t.translate("cat"), NOT_FOUND);
}
