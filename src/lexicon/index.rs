//! Compiled lookup index using an FST set
//!
//! The FST gives O(|word|) membership tests and ordered prefix streams.
//! It is built from words in ascending byte order and rejects anything else.
//!
//! On-disk layout:
//! - 4 bytes magic `CLX1`
//! - u32 LE format version
//! - u32 LE CRC32 of the canonical source text the index was built from
//! - raw FST set bytes

use std::io;

use crc32fast::Hasher;
use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Set, SetBuilder, Streamer};

use crate::error::Result;

const INDEX_MAGIC: &[u8; 4] = b"CLX1";
const INDEX_VERSION: u32 = 1;
const HEADER_LEN: usize = 12;

/// Immutable FST index over a sorted word list
#[derive(Debug)]
pub struct LexiconIndex {
    set: Set<Vec<u8>>,
    /// Checksum of the source text this index answers for
    source_checksum: u32,
}

impl LexiconIndex {
    /// Build an index from words in ascending byte order.
    ///
    /// Out-of-order or duplicate words fail with [`fst::Error`].
    pub fn build<I, S>(sorted_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = SetBuilder::memory();
        let mut hasher = Hasher::new();

        for word in sorted_words {
            let word = word.as_ref();
            builder.insert(word.as_bytes())?;
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }

        let set = Set::new(builder.into_inner()?)?;
        Ok(Self {
            set,
            source_checksum: hasher.finalize(),
        })
    }

    /// Decode an index previously produced by [`LexiconIndex::to_bytes`]
    pub fn from_bytes(mut data: Vec<u8>) -> io::Result<Self> {
        if data.len() < HEADER_LEN || &data[..4] != INDEX_MAGIC {
            return Err(invalid_data("missing index header"));
        }

        let version = read_u32(&data, 4);
        if version != INDEX_VERSION {
            return Err(invalid_data(format!(
                "unsupported index version {}, expected {}",
                version, INDEX_VERSION
            )));
        }
        let source_checksum = read_u32(&data, 8);

        let set = Set::new(data.split_off(HEADER_LEN)).map_err(invalid_data)?;
        set.as_fst().verify().map_err(invalid_data)?;

        Ok(Self {
            set,
            source_checksum,
        })
    }

    /// Serialize header + FST bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let fst_bytes = self.set.as_fst().as_bytes();
        let mut out = Vec::with_capacity(HEADER_LEN + fst_bytes.len());
        out.extend_from_slice(INDEX_MAGIC);
        out.extend_from_slice(&INDEX_VERSION.to_le_bytes());
        out.extend_from_slice(&self.source_checksum.to_le_bytes());
        out.extend_from_slice(fst_bytes);
        out
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn source_checksum(&self) -> u32 {
        self.source_checksum
    }

    /// All words starting with `prefix`, in ascending order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let matcher = Str::new(prefix).starts_with();
        let mut stream = self.set.search(matcher).into_stream();
        let mut results = Vec::new();
        while let Some(key) = stream.next() {
            if let Ok(word) = std::str::from_utf8(key) {
                results.push(word.to_string());
            }
        }
        results
    }
}

/// CRC32 over the canonical source text: every word followed by `\n`.
pub fn source_checksum<I, S>(sorted_words: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hasher = Hasher::new();
    for word in sorted_words {
        hasher.update(word.as_ref().as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize()
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(buf)
}

fn invalid_data<E>(err: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, err)
}
