//! Known-lemma sets read from WordNet `index.*` files.
//!
//! Only the lemma column is kept; it is all morphy needs to verify a
//! candidate. Each `index.<pos>` line starts with the lemma followed by its POS
//! character, and lines starting with whitespace are the license header.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use glossbridge_types::Pos;
use memmap2::Mmap;
use tracing::warn;

use crate::morphy::normalize;

/// Strategy for loading dictionary files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map each WordNet file (fast, zero-copy).
    Mmap,
    /// Read each file into an owned buffer (portable fallback).
    Owned,
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// Lemmas WordNet knows about, per part of speech.
#[derive(Debug, Default)]
pub struct LemmaIndex {
    lemmas: HashMap<Pos, HashSet<String>>,
}

impl LemmaIndex {
    /// Load `index.noun`, `index.verb`, `index.adj` and `index.adv` via mmap.
    pub fn load(dict_dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_mode(dict_dir, LoadMode::Mmap)
    }

    /// Load choosing between mmap and owned buffers at runtime.
    ///
    /// A missing index file leaves that POS empty, so every candidate for it
    /// is rejected and lemmatization falls back to the surface word.
    pub fn load_with_mode(dict_dir: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let dir = dict_dir.as_ref();
        let mut lemmas = HashMap::new();
        for pos in [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv] {
            let path = dir.join(format!("index.{}", pos.file_stem()));
            let mut set = HashSet::new();
            match load_optional_file(&path, mode)? {
                Some(buffer) => parse_index(buffer.as_slice(), &path, pos, &mut set)?,
                None => warn!("wordnet index {} not found", path.display()),
            }
            lemmas.insert(pos, set);
        }
        Ok(Self { lemmas })
    }

    pub fn from_lemmas<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Pos, &'a str)>,
    {
        let mut lemmas: HashMap<Pos, HashSet<String>> = HashMap::new();
        for (pos, lemma) in entries {
            lemmas.entry(pos).or_default().insert(normalize(lemma));
        }
        Self { lemmas }
    }

    pub fn contains(&self, pos: Pos, lemma: &str) -> bool {
        self.lemmas
            .get(&pos)
            .is_some_and(|set| set.contains(&normalize(lemma)))
    }

    pub fn len(&self, pos: Pos) -> usize {
        self.lemmas.get(&pos).map_or(0, HashSet::len)
    }

    pub fn total(&self) -> usize {
        self.lemmas.values().map(HashSet::len).sum()
    }
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    match mode {
        LoadMode::Mmap => {
            let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            unsafe { Mmap::map(&file) }
                .map(Buffer::Mmap)
                .with_context(|| format!("mmap {}", path.display()))
        }
        LoadMode::Owned => {
            let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .with_context(|| format!("read {}", path.display()))?;
            Ok(Buffer::Owned(buf))
        }
    }
}

fn load_optional_file(path: &Path, mode: LoadMode) -> Result<Option<Buffer>> {
    if !path.exists() {
        return Ok(None);
    }
    load_file(path, mode).map(Some)
}

fn parse_index(bytes: &[u8], path: &Path, pos: Pos, out: &mut HashSet<String>) -> Result<()> {
    for (lineno, raw_line) in bytes.split(|b| *b == b'\n').enumerate() {
        let line = strip_cr(raw_line);
        if line.is_empty() || matches!(line.first(), Some(b' ' | b'\t')) {
            continue;
        }
        let line_str = std::str::from_utf8(line)
            .with_context(|| format!("{}:{} is not utf-8", path.display(), lineno + 1))?;
        let mut tokens = line_str.split_ascii_whitespace();
        let (Some(lemma), Some(pos_token)) = (tokens.next(), tokens.next()) else {
            bail!("{}:{} malformed index line", path.display(), lineno + 1);
        };
        let line_pos = pos_token.chars().next().and_then(Pos::from_char);
        if line_pos != Some(pos) || pos_token.len() != 1 {
            bail!(
                "{}:{} expected pos '{}', found '{}'",
                path.display(),
                lineno + 1,
                pos.to_char(),
                pos_token
            );
        }
        out.insert(normalize(lemma));
    }
    Ok(())
}

fn strip_cr(line: &[u8]) -> &[u8] {
    if line.ends_with(b"\r") {
        &line[..line.len() - 1]
    } else {
        line
    }
}
