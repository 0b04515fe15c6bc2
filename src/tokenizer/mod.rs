//! Text → tokens pipeline around the compound decomposer

mod normalizer;
mod runs;
#[allow(clippy::module_inception)]
mod tokenizer;

pub use normalizer::*;
pub use runs::*;
pub use tokenizer::Tokenizer;
