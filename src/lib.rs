pub mod config;
pub mod decompose;
pub mod error;
pub mod lexicon;
pub mod tokenizer;

#[cfg(test)]
mod testing;

pub use config::{NormalizerConfig, TokenizerConfig, DEFAULT_CACHE_CAPACITY};
pub use decompose::{Decomposer, Decomposition};
pub use error::{Result, TokenizerError};
pub use lexicon::{Lexicon, LexiconSnapshot};
pub use tokenizer::{Normalizer, Tokenizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
