use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;
use tempfile::TempDir;

use compound_tokenizer::decompose::is_valid_final;
use compound_tokenizer::{Decomposer, Decomposition, Lexicon, Tokenizer, TokenizerConfig};

const COMPONENTS: &[&str] = &[
    "brand", "schutz", "konzept", "stahl", "beton", "decke", "wärme", "dämm", "verbund",
    "system", "haus", "tür",
];

fn write_source(dir: &TempDir, words: &[&str]) -> PathBuf {
    let path = dir.path().join("lexicon.txt");
    let mut text = words.join("\n");
    text.push('\n');
    fs::write(&path, text).unwrap();
    path
}

fn components_lexicon(dir: &TempDir) -> Arc<Lexicon> {
    Arc::new(Lexicon::load(write_source(dir, COMPONENTS)).unwrap())
}

/// Concatenated lexicon words, sometimes with a tail that breaks the split
fn arb_compound() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(COMPONENTS), 1..5),
        prop::option::of("[a-z]{1,3}"),
    )
        .prop_map(|(parts, tail)| {
            let mut word = parts.concat();
            if let Some(tail) = tail {
                word.push_str(&tail);
            }
            word
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn split_is_never_empty(word in "[a-zA-ZäöüÄÖÜß]{0,24}") {
        let dir = TempDir::new().unwrap();
        let splitter = Decomposer::without_cache(components_lexicon(&dir));
        prop_assert!(!splitter.split(&word).is_empty());
    }

    #[test]
    fn segments_cover_the_word(word in arb_compound()) {
        let dir = TempDir::new().unwrap();
        let lexicon = components_lexicon(&dir);
        let splitter = Decomposer::without_cache(lexicon.clone());

        match splitter.decompose(&word) {
            Decomposition::Compound(segments) => {
                let snapshot = lexicon.snapshot();
                prop_assert!(segments.len() >= 2);
                prop_assert!(segments.iter().all(|s| s.chars().count() >= 2));
                for segment in &segments {
                    prop_assert!(
                        is_valid_final(&snapshot, segment),
                        "segment {:?} of {:?} fails the lenient check",
                        segment,
                        word
                    );
                }
                prop_assert_eq!(segments.concat(), word.to_lowercase());
            }
            Decomposition::Single(single) => {
                prop_assert_eq!(single, word.to_lowercase());
            }
        }
    }

    #[test]
    fn cached_split_matches_uncached(words in prop::collection::vec(arb_compound(), 1..10)) {
        let dir = TempDir::new().unwrap();
        let lexicon = components_lexicon(&dir);
        let cached = Decomposer::with_cache_capacity(lexicon.clone(), 4);
        let uncached = Decomposer::without_cache(lexicon);

        // Twice over, so later lookups hit (or were evicted from) the cache
        for word in words.iter().chain(words.iter()) {
            prop_assert_eq!(cached.split(word), uncached.split(word));
        }
    }

    #[test]
    fn tokens_are_unique(text in "\\PC{0,64}") {
        let dir = TempDir::new().unwrap();
        let tokenizer =
            Tokenizer::with_lexicon(components_lexicon(&dir), &TokenizerConfig::default()).unwrap();

        let tokens = tokenizer.tokenize(&text);
        let unique: HashSet<&String> = tokens.iter().collect();
        prop_assert_eq!(unique.len(), tokens.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn added_word_is_contained(word in "\\PC{0,12}") {
        let dir = TempDir::new().unwrap();
        let lexicon = Lexicon::load(write_source(&dir, &["basis"])).unwrap();

        // Either rejected up front, or findable exactly as given
        if lexicon.add_word(&word).is_ok() {
            prop_assert!(lexicon.contains(&word));
            let reloaded = Lexicon::load(dir.path().join("lexicon.txt")).unwrap();
            prop_assert!(reloaded.contains(&word));
        } else {
            prop_assert!(!lexicon.contains(&word));
        }
    }

    #[test]
    fn persisted_lexicon_ignores_insertion_order(
        words in prop::collection::vec("[a-zäöüß]{2,10}", 1..8)
    ) {
        let forward = TempDir::new().unwrap();
        let backward = TempDir::new().unwrap();

        let a = Lexicon::load(write_source(&forward, &["basis"])).unwrap();
        let b = Lexicon::load(write_source(&backward, &["basis"])).unwrap();
        for word in &words {
            a.add_word(word).unwrap();
        }
        for word in words.iter().rev() {
            b.add_word(word).unwrap();
        }
        drop(a);
        drop(b);

        let a = Lexicon::load(forward.path().join("lexicon.txt")).unwrap();
        let b = Lexicon::load(backward.path().join("lexicon.txt")).unwrap();
        prop_assert_eq!(a.words(), b.words());
        for word in &words {
            prop_assert!(a.contains(word));
        }
        prop_assert_eq!(
            fs::read(forward.path().join("lexicon.txt")).unwrap(),
            fs::read(backward.path().join("lexicon.txt")).unwrap()
        );
    }
}
