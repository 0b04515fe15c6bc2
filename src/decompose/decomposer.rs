//! Greedy compound decomposition
//!
//! Left to right, longest prefix first, minimum two characters per segment.
//! Any position without a valid prefix abandons the whole decomposition;
//! there is no backtracking.

use std::sync::Arc;

use tracing::debug;

use super::cache::SplitCache;
use super::rules::{is_known, is_valid_final, MIN_SEGMENT_CHARS};
use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::lexicon::{Lexicon, LexiconSnapshot};

/// Outcome of decomposing one word
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decomposition {
    /// Two or more segments, each a valid lexicon word
    Compound(Vec<String>),
    /// No valid decomposition; the lowercased word itself
    Single(String),
}

impl Decomposition {
    pub fn is_compound(&self) -> bool {
        matches!(self, Decomposition::Compound(_))
    }

    /// Segments in order; never empty
    pub fn segments(&self) -> &[String] {
        match self {
            Decomposition::Compound(segments) => segments,
            Decomposition::Single(word) => std::slice::from_ref(word),
        }
    }

    pub fn into_segments(self) -> Vec<String> {
        match self {
            Decomposition::Compound(segments) => segments,
            Decomposition::Single(word) => vec![word],
        }
    }
}

/// Decompose a lowercase `word` against one lexicon snapshot.
pub fn decompose_with(lexicon: &LexiconSnapshot, word: &str) -> Decomposition {
    match greedy_split(lexicon, word) {
        Some(segments)
            if segments.len() > 1
                && segments.iter().all(|s| is_valid_segment(lexicon, s)) =>
        {
            Decomposition::Compound(segments)
        }
        _ => Decomposition::Single(word.to_string()),
    }
}

fn is_valid_segment(lexicon: &LexiconSnapshot, segment: &str) -> bool {
    segment.chars().count() >= MIN_SEGMENT_CHARS && is_valid_final(lexicon, segment)
}

/// Split `word` into the longest valid prefixes, or `None` if some
/// position has no valid prefix at all.
fn greedy_split(lexicon: &LexiconSnapshot, word: &str) -> Option<Vec<String>> {
    let mut segments = Vec::new();
    let mut remaining = word;

    while !remaining.is_empty() {
        // ends[i] is the byte length of the prefix holding i + 1 characters
        let ends: Vec<usize> = remaining
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(remaining.len()))
            .collect();

        let end = ends
            .iter()
            .skip(MIN_SEGMENT_CHARS - 1)
            .rev()
            .copied()
            .find(|&end| {
                let (prefix, rest) = remaining.split_at(end);
                if rest.is_empty() {
                    is_valid_final(lexicon, prefix)
                } else {
                    is_known(lexicon, prefix)
                }
            })?;

        segments.push(remaining[..end].to_string());
        remaining = &remaining[end..];
    }

    Some(segments)
}

/// Compound splitter over a shared lexicon with an optional LRU cache
pub struct Decomposer {
    lexicon: Arc<Lexicon>,
    cache: Option<SplitCache>,
}

impl Decomposer {
    /// Splitter with a cache of [`DEFAULT_CACHE_CAPACITY`] entries
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_cache_capacity(lexicon, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_cache_capacity(lexicon: Arc<Lexicon>, capacity: usize) -> Self {
        Self {
            lexicon,
            cache: Some(SplitCache::new(capacity)),
        }
    }

    /// Splitter without caching, for rarely repeated input or tight memory
    pub fn without_cache(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            cache: None,
        }
    }

    /// Decompose a word into its segments.
    ///
    /// Returns the lowercased word as the only segment when it cannot be split.
    pub fn split(&self, word: &str) -> Vec<String> {
        self.decompose(word).into_segments()
    }

    pub fn decompose(&self, word: &str) -> Decomposition {
        let lower = word.to_lowercase();
        let snapshot = self.lexicon.snapshot();

        let cache = match &self.cache {
            Some(cache) => cache,
            None => return decompose_with(&snapshot, &lower),
        };

        if let Some(hit) = cache.get(&lower, snapshot.generation()) {
            return hit;
        }

        let result = decompose_with(&snapshot, &lower);
        cache.put(lower, snapshot.generation(), result.clone());
        result
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
            debug!("Cleared split cache");
        }
    }

    /// Number of cached splits (0 when caching is disabled)
    pub fn cache_len(&self) -> usize {
        self.cache.as_ref().map_or(0, SplitCache::len)
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }
}
