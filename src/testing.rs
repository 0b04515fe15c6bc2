//! Shared fixtures for unit tests

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::lexicon::Lexicon;

/// Write `lines` as `lexicon.txt` inside `dir` and return its path
pub fn write_lexicon(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("lexicon.txt");
    let mut text = lines.join("\n");
    text.push('\n');
    std::fs::write(&path, text).unwrap();
    path
}

/// Load a fresh lexicon holding `words`
pub fn load_lexicon(dir: &Path, words: &[&str]) -> Arc<Lexicon> {
    let path = write_lexicon(dir, words);
    Arc::new(Lexicon::load(path).unwrap())
}
