use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TokenizerError};

/// Default number of cached compound splits.
///
/// At roughly 100 bytes per entry this is about 10MB.
pub const DEFAULT_CACHE_CAPACITY: usize = 100_000;

/// Tokenizer configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Memoize compound splits in an LRU cache
    pub cache: bool,
    pub cache_capacity: usize,
    /// Also emit the lowercased word run itself (umlauts preserved)
    pub lowercase_original: bool,
    /// Skip German stop words entirely
    pub remove_stopwords: bool,
    pub normalizers: NormalizerConfig,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            cache: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            lowercase_original: true,
            remove_stopwords: false,
            normalizers: NormalizerConfig::default(),
        }
    }
}

impl TokenizerConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TokenizerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            TokenizerError::InvalidConfig(format!("cannot read {:?}: {}", path, e))
        })?;
        Self::from_json_str(&json)
    }

    /// Check the configuration for values the tokenizer cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.cache && self.cache_capacity == 0 {
            return Err(TokenizerError::InvalidConfig(
                "cache_capacity must be positive when the cache is enabled".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_lowercase_original(mut self, enabled: bool) -> Self {
        self.lowercase_original = enabled;
        self
    }

    pub fn with_stopword_removal(mut self, enabled: bool) -> Self {
        self.remove_stopwords = enabled;
        self
    }

    pub fn with_normalizers(mut self, normalizers: NormalizerConfig) -> Self {
        self.normalizers = normalizers;
        self
    }
}

/// Which normalization steps to apply to decomposed segments.
///
/// Steps always run in declaration order; each one can only be switched on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub nfkd_decompose: bool,
    pub remove_control_chars: bool,
    pub lowercase: bool,
    pub normalize_quotes: bool,
    pub expand_ligatures: bool,
    pub convert_eszett: bool,
    pub remove_combining_marks: bool,
    pub stem_german: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            nfkd_decompose: true,
            remove_control_chars: true,
            lowercase: true,
            normalize_quotes: true,
            expand_ligatures: true,
            convert_eszett: true,
            remove_combining_marks: true,
            stem_german: true,
        }
    }
}

impl NormalizerConfig {
    /// Every step disabled; segments pass through unchanged
    pub fn none() -> Self {
        Self {
            nfkd_decompose: false,
            remove_control_chars: false,
            lowercase: false,
            normalize_quotes: false,
            expand_ligatures: false,
            convert_eszett: false,
            remove_combining_marks: false,
            stem_german: false,
        }
    }

    /// All steps except the stemmer
    pub fn without_stemming() -> Self {
        Self {
            stem_german: false,
            ..Self::default()
        }
    }
}
