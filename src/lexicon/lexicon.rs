//! Mutable word lexicon with a compiled FST index
//!
//! The word set is the source of truth for mutations and sits behind a
//! write lock. Readers never touch it: they load the published
//! [`LexiconSnapshot`] (index + generation) through an `ArcSwap`, so lookups
//! stay lock-free while a mutation rebuilds.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::index::{source_checksum, LexiconIndex};
use super::store::LexiconStore;
use crate::error::{Result, TokenizerError};

/// Immutable view of the lexicon at one generation
pub struct LexiconSnapshot {
    index: LexiconIndex,
    generation: u64,
}

impl LexiconSnapshot {
    /// Exact lookup; callers pass already-lowercased words.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Incremented by every successful mutation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.index.words_with_prefix(prefix)
    }
}

/// Word lexicon backed by a text file and a compiled FST index
pub struct Lexicon {
    /// Source of truth for modifications
    words: RwLock<BTreeSet<String>>,
    /// Published index for readers
    current: ArcSwap<LexiconSnapshot>,
    store: LexiconStore,
}

impl Lexicon {
    /// Load a lexicon from its source file.
    ///
    /// The compiled index next to the source is reused when it matches the
    /// source text; otherwise it is rebuilt and written back.
    pub fn load<P: AsRef<Path>>(source_path: P) -> Result<Self> {
        let store = LexiconStore::new(source_path);
        let words = store.read_words()?;

        let index = match store.load_index() {
            Ok(index) if index.source_checksum() == source_checksum(&words) => {
                info!(
                    "Loaded lexicon {:?}: {} words from compiled index",
                    store.source_path(),
                    words.len()
                );
                index
            }
            Ok(_) => {
                warn!(
                    "Compiled index {:?} does not match its source, rebuilding",
                    store.index_path()
                );
                Self::rebuild_index(&store, &words)?
            }
            Err(e) => {
                if store.index_exists() {
                    warn!("{}, rebuilding", e);
                }
                Self::rebuild_index(&store, &words)?
            }
        };

        Ok(Self {
            words: RwLock::new(words),
            current: ArcSwap::from_pointee(LexiconSnapshot {
                index,
                generation: 0,
            }),
            store,
        })
    }

    fn rebuild_index(store: &LexiconStore, words: &BTreeSet<String>) -> Result<LexiconIndex> {
        let index = LexiconIndex::build(words)?;
        store.save_index(&index)?;
        info!(
            "Built compiled index {:?}: {} words",
            store.index_path(),
            index.len()
        );
        Ok(index)
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.current.load().contains(&word.to_lowercase())
    }

    /// The currently published index and its generation
    pub fn snapshot(&self) -> Arc<LexiconSnapshot> {
        self.current.load_full()
    }

    pub fn generation(&self) -> u64 {
        self.current.load().generation
    }

    pub fn word_count(&self) -> usize {
        self.words.read().len()
    }

    /// All words in ascending order
    pub fn words(&self) -> Vec<String> {
        self.words.read().iter().cloned().collect()
    }

    /// Words starting with `prefix` (case-insensitive), in ascending order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.current.load().words_with_prefix(&prefix.to_lowercase())
    }

    pub fn source_path(&self) -> &Path {
        self.store.source_path()
    }

    pub fn index_path(&self) -> &Path {
        self.store.index_path()
    }

    /// Add a word, rebuild the index and persist both files.
    ///
    /// Returns `false` without touching disk if the word is already present.
    /// On error the lexicon is unchanged.
    pub fn add_word(&self, word: &str) -> Result<bool> {
        let word = validate_word(word)?;

        let mut words = self.words.write();
        if words.contains(&word) {
            return Ok(false);
        }

        let mut candidate = words.clone();
        candidate.insert(word.clone());
        let generation = self.commit(&mut words, candidate)?;

        debug!("Added {:?} to lexicon, generation {}", word, generation);
        Ok(true)
    }

    /// Remove a word, rebuild the index and persist both files.
    ///
    /// Returns `false` without touching disk if the word is absent.
    /// On error the lexicon is unchanged.
    pub fn remove_word(&self, word: &str) -> Result<bool> {
        let word = validate_word(word)?;

        let mut words = self.words.write();
        if !words.contains(&word) {
            return Ok(false);
        }

        let mut candidate = words.clone();
        candidate.remove(&word);
        let generation = self.commit(&mut words, candidate)?;

        debug!("Removed {:?} from lexicon, generation {}", word, generation);
        Ok(true)
    }

    /// Rebuild the index and rewrite both files from the current word set
    pub fn rebuild(&self) -> Result<()> {
        let words = self.words.write();
        let index = LexiconIndex::build(&*words)?;
        self.store.save(&words, &index)?;

        let generation = self.current.load().generation;
        self.current
            .store(Arc::new(LexiconSnapshot { index, generation }));

        info!(
            "Rebuilt lexicon {:?}: {} words",
            self.store.source_path(),
            words.len()
        );
        Ok(())
    }

    /// Build, persist and publish `candidate`. The caller holds the write lock.
    ///
    /// Nothing in memory changes unless both files were written.
    fn commit(&self, words: &mut BTreeSet<String>, candidate: BTreeSet<String>) -> Result<u64> {
        let index = LexiconIndex::build(&candidate)?;
        self.store.save(&candidate, &index)?;

        let generation = self.current.load().generation + 1;
        *words = candidate;
        self.current
            .store(Arc::new(LexiconSnapshot { index, generation }));
        Ok(generation)
    }
}

/// Lowercase a word for insertion or removal, rejecting anything the
/// line-based source format cannot hold. Lines are trimmed on load, so
/// surrounding whitespace would not survive a reload.
fn validate_word(word: &str) -> Result<String> {
    let padded = word.trim() != word;
    if word.is_empty() || padded || word.starts_with('#') || word.contains(['\n', '\r']) {
        return Err(TokenizerError::InvalidWord(word.to_string()));
    }
    Ok(word.to_lowercase())
}
