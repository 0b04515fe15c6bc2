//! Mutable, persistable word lexicon
//!
//! # Architecture
//!
//! - `LexiconIndex`: immutable FST set plus the checksum of its source text
//! - `LexiconStore`: source/index file paths and the atomic write protocol
//! - `Lexicon`: lock-guarded word set publishing `LexiconSnapshot`s to readers

mod index;
#[allow(clippy::module_inception)]
mod lexicon;
mod store;

pub use index::*;
pub use lexicon::*;
pub use store::*;
