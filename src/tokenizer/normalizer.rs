use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::config::NormalizerConfig;

/// A single normalization step. Steps run in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalizeStep {
    NfkdDecompose,
    RemoveControlChars,
    Lowercase,
    NormalizeQuotes,
    ExpandLigatures,
    ConvertEszett,
    RemoveCombiningMarks,
    StemGerman,
}

impl NormalizeStep {
    pub const ALL: [NormalizeStep; 8] = [
        NormalizeStep::NfkdDecompose,
        NormalizeStep::RemoveControlChars,
        NormalizeStep::Lowercase,
        NormalizeStep::NormalizeQuotes,
        NormalizeStep::ExpandLigatures,
        NormalizeStep::ConvertEszett,
        NormalizeStep::RemoveCombiningMarks,
        NormalizeStep::StemGerman,
    ];
}

/// Configurable pipeline of pure string transforms applied to segments
pub struct Normalizer {
    steps: Vec<NormalizeStep>,
    stemmer: Option<Stemmer>,
}

impl Normalizer {
    /// Normalizer with every step enabled
    pub fn new() -> Self {
        Self::with_steps(NormalizeStep::ALL)
    }

    pub fn with_steps<I: IntoIterator<Item = NormalizeStep>>(steps: I) -> Self {
        let steps: Vec<NormalizeStep> = steps.into_iter().collect();
        let stemmer = if steps.contains(&NormalizeStep::StemGerman) {
            Some(Stemmer::create(Algorithm::German))
        } else {
            None
        };
        Self { steps, stemmer }
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        let enabled = [
            config.nfkd_decompose,
            config.remove_control_chars,
            config.lowercase,
            config.normalize_quotes,
            config.expand_ligatures,
            config.convert_eszett,
            config.remove_combining_marks,
            config.stem_german,
        ];
        Self::with_steps(
            NormalizeStep::ALL
                .into_iter()
                .zip(enabled)
                .filter_map(|(step, on)| on.then_some(step)),
        )
    }

    pub fn steps(&self) -> &[NormalizeStep] {
        &self.steps
    }

    /// Apply all configured steps in order
    pub fn normalize(&self, text: &str) -> String {
        let mut out = text.to_string();
        for step in &self.steps {
            out = self.apply(*step, &out);
        }
        out
    }

    /// Lowercase without any other transformation (umlauts preserved)
    pub fn lowercase_only(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn apply(&self, step: NormalizeStep, text: &str) -> String {
        match step {
            NormalizeStep::NfkdDecompose => nfkd_decompose(text),
            NormalizeStep::RemoveControlChars => remove_control_chars(text),
            NormalizeStep::Lowercase => text.to_lowercase(),
            NormalizeStep::NormalizeQuotes => normalize_quotes(text),
            NormalizeStep::ExpandLigatures => expand_ligatures(text),
            NormalizeStep::ConvertEszett => convert_eszett(text),
            NormalizeStep::RemoveCombiningMarks => remove_combining_marks(text),
            // Built once in `with_steps` and reused for every segment
            NormalizeStep::StemGerman => match &self.stemmer {
                Some(stemmer) => stemmer.stem(text).into_owned(),
                None => text.to_string(),
            },
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Unicode NFKD: ä → a + U+0308, ﬁ → fi
pub fn nfkd_decompose(text: &str) -> String {
    text.nfkd().collect()
}

pub fn remove_control_chars(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Typographic quotes to their ASCII counterparts
pub fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201E}' | '\u{201C}' | '\u{201D}' | '\u{00AB}' | '\u{00BB}' => '"',
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2039}' | '\u{203A}' => '\'',
            other => other,
        })
        .collect()
}

/// æ → ae, œ → oe (either case)
pub fn expand_ligatures(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'æ' | 'Æ' => out.push_str("ae"),
            'œ' | 'Œ' => out.push_str("oe"),
            other => out.push(other),
        }
    }
    out
}

/// ß → ss. NFKD leaves ß alone, so this has to be explicit.
pub fn convert_eszett(text: &str) -> String {
    text.replace('ß', "ss")
}

/// Drop nonspacing marks (Mn), e.g. the umlaut dots left behind by NFKD.
///
/// Spacing (Mc) and enclosing (Me) marks are kept.
pub fn remove_combining_marks(text: &str) -> String {
    text.chars()
        .filter(|c| c.general_category() != GeneralCategory::NonspacingMark)
        .collect()
}
