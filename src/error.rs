use std::path::PathBuf;

use thiserror::Error;

/// Main error type for tokenizer and lexicon operations
#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Failed to read lexicon source {path:?}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid lexicon index {path:?}: {reason}")]
    InvalidIndex { path: PathBuf, reason: String },

    #[error("Failed to persist lexicon to {path:?}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Index build error: {0}")]
    IndexBuild(#[from] fst::Error),

    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;

impl TokenizerError {
    /// Check if this error came from rebuilding or writing back the lexicon.
    ///
    /// The in-memory lexicon is left exactly as it was before the failed call,
    /// so the caller may retry the mutation.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            TokenizerError::Persist { .. } | TokenizerError::IndexBuild(_)
        )
    }
}
