use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use stop_words::{get, LANGUAGE};

use super::normalizer::Normalizer;
use super::runs::split_words;
use crate::config::TokenizerConfig;
use crate::decompose::Decomposer;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// German tokenizer: word runs → compound decomposition → normalized segments
pub struct Tokenizer {
    lexicon: Arc<Lexicon>,
    decomposer: Decomposer,
    normalizer: Normalizer,
    stopwords: HashSet<String>,
    lowercase_original: bool,
}

impl Tokenizer {
    /// Load the lexicon at `dict_path` and build a tokenizer around it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use compound_tokenizer::{Tokenizer, TokenizerConfig};
    ///
    /// let tokenizer = Tokenizer::new("dictionaries/components.txt", &TokenizerConfig::default())?;
    /// let tokens = tokenizer.tokenize("Brandschutzkonzept");
    /// // ["brandschutzkonzept", "brand", "schutz", "konzept"]
    /// # Ok::<(), compound_tokenizer::TokenizerError>(())
    /// ```
    pub fn new<P: AsRef<Path>>(dict_path: P, config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;
        let lexicon = Arc::new(Lexicon::load(dict_path)?);
        Self::with_lexicon(lexicon, config)
    }

    /// Build a tokenizer over an already loaded, possibly shared lexicon
    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;

        let decomposer = if config.cache {
            Decomposer::with_cache_capacity(lexicon.clone(), config.cache_capacity)
        } else {
            Decomposer::without_cache(lexicon.clone())
        };

        let stopwords = if config.remove_stopwords {
            get(LANGUAGE::German)
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect()
        } else {
            HashSet::new()
        };

        Ok(Self {
            lexicon,
            decomposer,
            normalizer: Normalizer::from_config(&config.normalizers),
            stopwords,
            lowercase_original: config.lowercase_original,
        })
    }

    /// Tokenize text into deduplicated tokens in order of first appearance
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = OrderedTokens::default();
        for (_, run_tokens) in self.word_tokens(text) {
            for token in run_tokens {
                tokens.push(token);
            }
        }
        tokens.into_vec()
    }

    /// Tokenize and tag each token with the ordinal of the word run it came from.
    ///
    /// Tokens are deduplicated within a run only. Skipped stop words still
    /// advance the position.
    pub fn tokenize_with_positions(&self, text: &str) -> Vec<(String, u32)> {
        let mut results = Vec::new();
        for (pos, run_tokens) in self.word_tokens(text) {
            let mut run = OrderedTokens::default();
            for token in run_tokens {
                run.push(token);
            }
            results.extend(run.into_vec().into_iter().map(|t| (t, pos)));
        }
        results
    }

    /// Per word run: its position and the tokens it emits, before deduplication
    fn word_tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (u32, Vec<String>)> + 'a {
        split_words(text)
            .into_iter()
            .filter(|raw| raw.is_word())
            .zip(0u32..)
            .filter_map(move |(raw, pos)| {
                let original = self.normalizer.lowercase_only(raw.text);
                if self.stopwords.contains(&original) {
                    return None;
                }

                let mut tokens = Vec::new();
                if self.lowercase_original {
                    tokens.push(original);
                }
                for segment in self.decomposer.split(raw.text) {
                    tokens.push(self.normalizer.normalize(&segment));
                }
                Some((pos, tokens))
            })
    }

    /// Add a word to the lexicon and drop cached splits
    pub fn add_word(&self, word: &str) -> Result<bool> {
        let changed = self.lexicon.add_word(word)?;
        if changed {
            self.decomposer.clear_cache();
        }
        Ok(changed)
    }

    /// Remove a word from the lexicon and drop cached splits
    pub fn remove_word(&self, word: &str) -> Result<bool> {
        let changed = self.lexicon.remove_word(word)?;
        if changed {
            self.decomposer.clear_cache();
        }
        Ok(changed)
    }

    /// Rebuild the compiled index and rewrite the lexicon source
    pub fn rebuild_dictionary(&self) -> Result<()> {
        self.lexicon.rebuild()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    pub fn split(&self, word: &str) -> Vec<String> {
        self.decomposer.split(word)
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn dictionary_word_count(&self) -> usize {
        self.lexicon.word_count()
    }

    pub fn cache_len(&self) -> usize {
        self.decomposer.cache_len()
    }

    pub fn clear_cache(&self) {
        self.decomposer.clear_cache();
    }

    pub fn cache_enabled(&self) -> bool {
        self.decomposer.cache_enabled()
    }

    pub fn lowercase_original_enabled(&self) -> bool {
        self.lowercase_original
    }
}

/// First-occurrence-wins token list
#[derive(Default)]
struct OrderedTokens {
    seen: HashSet<String>,
    tokens: Vec<String>,
}

impl OrderedTokens {
    fn push(&mut self, token: String) {
        if !self.seen.contains(&token) {
            self.seen.insert(token.clone());
            self.tokens.push(token);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}
