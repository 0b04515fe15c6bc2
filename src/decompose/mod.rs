//! Compound word decomposition
//!
//! - `rules`: strict/lenient segment checks, umlaut folding, suffix list
//! - `decomposer`: greedy longest-prefix segmentation
//! - `cache`: generation-tagged LRU of split results

mod cache;
mod decomposer;
mod rules;

pub use cache::*;
pub use decomposer::*;
pub use rules::*;
