//! Segment validity rules
//!
//! Strict: direct hit, or hit after umlaut folding. Used for every segment
//! that still has characters after it.
//! Lenient: strict, or a suffix-stripped stem that passes a direct or folded
//! hit. Used only for the segment that ends the word.

use std::borrow::Cow;

use crate::lexicon::LexiconSnapshot;

/// Shortest segment, in characters
pub const MIN_SEGMENT_CHARS: usize = 2;

/// Inflectional endings tried by the lenient check.
///
/// First match wins. The order is not length-sorted and must stay as is.
pub const GERMAN_SUFFIXES: &[&str] = &[
    "ungen", "schaft", "heiten", "keiten",
    "ung", "heit", "keit", "tion", "isch", "lich", "chen", "lein",
    "haft", "bar", "sam", "tum", "ig", "er", "en", "em", "es",
    "st", "nd", "te", "el", "le", "se", "ße", "ze",
    "e", "s", "n", "t",
];

/// Map ä→a, ö→o, ü→u (either case) and ß→ss.
///
/// Only for lexicon lookups; never applied to emitted segments.
pub fn fold_umlauts(word: &str) -> Cow<'_, str> {
    if !word.chars().any(is_foldable) {
        return Cow::Borrowed(word);
    }

    let mut folded = String::with_capacity(word.len() + 1);
    for c in word.chars() {
        match c {
            'ä' | 'Ä' => folded.push('a'),
            'ö' | 'Ö' => folded.push('o'),
            'ü' | 'Ü' => folded.push('u'),
            'ß' => folded.push_str("ss"),
            other => folded.push(other),
        }
    }
    Cow::Owned(folded)
}

fn is_foldable(c: char) -> bool {
    matches!(c, 'ä' | 'Ä' | 'ö' | 'Ö' | 'ü' | 'Ü' | 'ß')
}

/// Strict check: direct or umlaut-folded hit
pub fn is_known(lexicon: &LexiconSnapshot, word: &str) -> bool {
    if lexicon.contains(word) {
        return true;
    }
    match fold_umlauts(word) {
        Cow::Owned(folded) => lexicon.contains(&folded),
        Cow::Borrowed(_) => false,
    }
}

/// Lenient check: strict, then suffix stripping
pub fn is_valid_final(lexicon: &LexiconSnapshot, word: &str) -> bool {
    if is_known(lexicon, word) {
        return true;
    }

    GERMAN_SUFFIXES.iter().any(|suffix| match word.strip_suffix(suffix) {
        Some(stem) if stem.chars().count() >= MIN_SEGMENT_CHARS => {
            lexicon.contains(stem) || lexicon.contains(&fold_umlauts(stem))
        }
        _ => false,
    })
}
