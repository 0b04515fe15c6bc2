/// Kind of a raw run of characters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal run of letters and digits
    Word,
    /// Maximal run of everything else
    Separator,
}

/// A run of input text before decomposition or normalization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl RawToken<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Split text into alternating word and separator runs.
///
/// The runs cover the input exactly once, in order, without gaps.
pub fn split_words(text: &str) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices();

    let mut kind = match chars.next() {
        Some((_, first)) => kind_of(first),
        None => return tokens,
    };
    let mut start = 0;

    for (i, c) in chars {
        let next = kind_of(c);
        if next != kind {
            tokens.push(RawToken {
                text: &text[start..i],
                kind,
                start,
                end: i,
            });
            start = i;
            kind = next;
        }
    }

    tokens.push(RawToken {
        text: &text[start..],
        kind,
        start,
        end: text.len(),
    });
    tokens
}

fn kind_of(c: char) -> TokenKind {
    if c.is_alphabetic() || c.is_numeric() {
        TokenKind::Word
    } else {
        TokenKind::Separator
    }
}
