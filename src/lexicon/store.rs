//! On-disk storage for the lexicon source text and its compiled index.
//!
//! Write protocol for a mutation:
//! 1. Stage `<index>.tmp` and `<source>.tmp`, each fsynced
//! 2. Rename the index into place
//! 3. Rename the source into place (commit point)
//!
//! A failure between 2 and 3 leaves an index whose source checksum no longer
//! matches the source text, so the next load rebuilds it.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::index::LexiconIndex;
use crate::error::{Result, TokenizerError};

const INDEX_EXTENSION: &str = "fst";

/// Paths of the lexicon source file and its compiled index
#[derive(Clone, Debug)]
pub struct LexiconStore {
    source_path: PathBuf,
    index_path: PathBuf,
}

impl LexiconStore {
    /// The index lives next to the source with the extension replaced by `fst`.
    pub fn new<P: AsRef<Path>>(source_path: P) -> Self {
        let source_path = source_path.as_ref().to_path_buf();
        let index_path = source_path.with_extension(INDEX_EXTENSION);
        Self {
            source_path,
            index_path,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Read the source text into a lowercase word set
    pub fn read_words(&self) -> Result<BTreeSet<String>> {
        let text =
            fs::read_to_string(&self.source_path).map_err(|source| TokenizerError::SourceRead {
                path: self.source_path.clone(),
                source,
            })?;
        Ok(parse_source(&text))
    }

    /// Load the compiled index. Any failure is an [`TokenizerError::InvalidIndex`].
    pub fn load_index(&self) -> Result<LexiconIndex> {
        let invalid = |e: io::Error| TokenizerError::InvalidIndex {
            path: self.index_path.clone(),
            reason: e.to_string(),
        };
        let bytes = fs::read(&self.index_path).map_err(invalid)?;
        LexiconIndex::from_bytes(bytes).map_err(invalid)
    }

    pub fn index_exists(&self) -> bool {
        self.index_path.exists()
    }

    /// Write only the compiled index (load-time rebuild; the source is left untouched)
    pub fn save_index(&self, index: &LexiconIndex) -> Result<()> {
        let staged = stage(&self.index_path, &index.to_bytes())?;
        commit(&staged, &self.index_path)
    }

    /// Persist both the index and the sorted source text
    pub fn save(&self, words: &BTreeSet<String>, index: &LexiconIndex) -> Result<()> {
        let staged_index = stage(&self.index_path, &index.to_bytes())?;
        let staged_source = match stage(&self.source_path, &render_source(words)) {
            Ok(path) => path,
            Err(e) => {
                let _ = fs::remove_file(&staged_index);
                return Err(e);
            }
        };

        if let Err(e) = commit(&staged_index, &self.index_path) {
            let _ = fs::remove_file(&staged_source);
            return Err(e);
        }
        commit(&staged_source, &self.source_path)
    }
}

/// Parse source text: one word per line, blank and `#` lines skipped.
pub fn parse_source(text: &str) -> BTreeSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Canonical source text: sorted words, one per line
pub fn render_source(words: &BTreeSet<String>) -> Vec<u8> {
    let capacity = words.iter().map(|w| w.len() + 1).sum();
    let mut out = Vec::with_capacity(capacity);
    for word in words {
        out.extend_from_slice(word.as_bytes());
        out.push(b'\n');
    }
    out
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to a synced temporary sibling of `path`
fn stage(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let tmp = tmp_path(path);
    let written = File::create(&tmp).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });

    match written {
        Ok(()) => Ok(tmp),
        Err(source) => {
            let _ = fs::remove_file(&tmp);
            Err(TokenizerError::Persist {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn commit(staged: &Path, path: &Path) -> Result<()> {
    fs::rename(staged, path).map_err(|source| {
        let _ = fs::remove_file(staged);
        TokenizerError::Persist {
            path: path.to_path_buf(),
            source,
        }
    })
}
