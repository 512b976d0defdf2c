use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use glossbridge_morph::{LemmaIndex, LoadMode, Morphy};
use glossbridge_types::Pos;

const USAGE: &str =
    "usage: cargo run -p glossbridge-morph --example lookup -- <dict-dir> [--demo | <word>]";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let dict_dir = args.next().map(PathBuf::from).context(USAGE)?;
    let next = args.next();
    if args.next().is_some() {
        bail!("too many arguments");
    }

    let words: Vec<String> = match next.as_deref() {
        Some("--demo") => vec![
            "running".into(),
            "better".into(),
            "children".into(),
            "dogs".into(),
            "happiest".into(),
        ],
        Some(word) => vec![word.to_string()],
        None => bail!(USAGE),
    };

    let index = LemmaIndex::load_with_mode(&dict_dir, LoadMode::Mmap)
        .with_context(|| format!("loading WordNet index from {}", dict_dir.display()))?;
    let morph = Morphy::load(&dict_dir)
        .with_context(|| format!("loading exceptions from {}", dict_dir.display()))?;

    println!("Dictionary: {}", dict_dir.display());

    for word in words {
        println!("\nSurface: {}", word);
        for pos in [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv] {
            let candidates = morph.lemmas_for(pos, &word, |p, lemma| index.contains(p, lemma));
            if candidates.is_empty() {
                continue;
            }
            println!("  {:?}:", pos);
            for cand in candidates {
                println!("    {:<10} [{:?}]", cand.lemma, cand.source);
            }
        }
    }

    Ok(())
}
