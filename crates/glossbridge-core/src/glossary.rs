use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::parse::head_key;

#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("failed to read glossary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a glossary file into trimmed lines, in file order.
///
/// A missing file yields no lines so the engine keeps running with an empty
/// glossary for that direction.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GlossaryError> {
    let path_ref = path.as_ref();
    let io_err = |source: io::Error| GlossaryError::Io {
        path: path_ref.to_path_buf(),
        source,
    };

    let file = match File::open(path_ref) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("glossary {} not found, using empty glossary", path_ref.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(io_err(err)),
    };

    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let raw = line.map_err(io_err)?;
        lines.push(raw.trim().to_string());
    }
    Ok(lines)
}

/// Raw glossary lines plus a headword index over them.
///
/// The index maps each lowercased headword to the positions of its defining
/// lines, in file order. Lines without a headword stay in `lines` (the
/// reverse scanner reads them) but have no index entry.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    lines: Vec<String>,
    index: HashMap<String, Vec<usize>>,
}

impl Glossary {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, line) in lines.iter().enumerate() {
            if let Some(key) = head_key(line) {
                index.entry(key).or_default().push(pos);
            }
        }
        Self { lines, index }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Arc<Self>, GlossaryError> {
        let path_ref = path.as_ref();
        let glossary = Self::from_lines(load_lines(path_ref)?);
        info!(
            "loaded {} lines ({} headwords) from {}",
            glossary.len(),
            glossary.headword_count(),
            path_ref.display()
        );
        Ok(Arc::new(glossary))
    }

    /// Defining lines for a headword; `key` must already be lowercased.
    pub fn entries<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.index
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&pos| self.lines[pos].as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Every loaded line, including those without a headword.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn headword_count(&self) -> usize {
        self.index.len()
    }
}
