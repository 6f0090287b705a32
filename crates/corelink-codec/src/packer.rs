// SPDX-License-Identifier: AGPL-3.0-only

//! Text to 32-bit word packing.
//!
//! ```text
//! "hi" budget 4  ->  'h' 'i' ' ' ' '  ->  0x68_69_20_20
//!                     MSB         LSB
//! ```
//!
//! Text is right-padded to the byte budget, one byte per character, and
//! every four bytes become one word with the first character in the most
//! significant byte. Characters above U+00FF have no single-byte code and
//! are written as a space. Decoding maps each byte back to the character
//! with that code point, so ASCII text round-trips exactly.

use crate::error::{CodecError, Result};
use crate::record::PackedRecord;

/// Bytes per packed word.
pub const WORD_BYTES: usize = 4;

/// Default padding byte (ASCII space).
pub const PAD: u8 = b' ';

/// Byte written for characters that do not fit in 8 bits.
pub const REPLACEMENT: u8 = b' ';

/// Stateless packer; only the padding byte is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPacker {
    pad: u8,
}

impl Default for BitPacker {
    fn default() -> Self {
        Self { pad: PAD }
    }
}

impl BitPacker {
    /// Packer padding with ASCII space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different padding byte.
    #[must_use]
    pub fn with_pad(mut self, pad: u8) -> Self {
        self.pad = pad;
        self
    }

    /// Padding byte in use.
    #[must_use]
    pub fn pad(&self) -> u8 {
        self.pad
    }

    /// Pack `text` into `budget / 4` words.
    ///
    /// # Errors
    ///
    /// - `InvalidBudget` if `budget` is not a positive multiple of 4.
    /// - `TextTooLong` if `text` has more than `budget` characters.
    pub fn encode(&self, text: &str, budget: usize) -> Result<PackedRecord> {
        check_budget(budget)?;
        let len = text.chars().count();
        if len > budget {
            return Err(CodecError::TextTooLong { len, budget });
        }

        let mut bytes = text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT))
            .chain(std::iter::repeat(self.pad))
            .take(budget);

        let mut words = Vec::with_capacity(budget / WORD_BYTES);
        for _ in 0..budget / WORD_BYTES {
            let mut word = [self.pad; WORD_BYTES];
            for byte in &mut word {
                if let Some(b) = bytes.next() {
                    *byte = b;
                }
            }
            words.push(u32::from_be_bytes(word));
        }

        tracing::trace!("Packed {} chars into {} words", len, words.len());
        Ok(PackedRecord::from(words))
    }

    /// Unpack `char_count` characters from `words`, padding included.
    ///
    /// Words past `char_count / 4` are ignored.
    ///
    /// # Errors
    ///
    /// - `InvalidBudget` if `char_count` is not a positive multiple of 4.
    /// - `ShortRecord` if `words` holds fewer than `char_count` bytes.
    pub fn decode(&self, words: &[u32], char_count: usize) -> Result<String> {
        check_budget(char_count)?;
        let needed = char_count / WORD_BYTES;
        if words.len() < needed {
            return Err(CodecError::ShortRecord {
                words: words.len(),
                needed,
            });
        }

        let text: String = words[..needed]
            .iter()
            .flat_map(|w| w.to_be_bytes())
            .map(char::from)
            .collect();

        tracing::trace!("Unpacked {} words into {} chars", needed, char_count);
        Ok(text)
    }

    /// [`decode`](Self::decode) with trailing padding removed.
    ///
    /// # Errors
    ///
    /// See [`decode`](Self::decode).
    pub fn decode_trimmed(&self, words: &[u32], char_count: usize) -> Result<String> {
        let mut text = self.decode(words, char_count)?;
        let pad = char::from(self.pad);
        let keep = text.trim_end_matches(pad).len();
        text.truncate(keep);
        Ok(text)
    }
}

/// Pack with the default (space) padding.
///
/// # Errors
///
/// See [`BitPacker::encode`].
pub fn encode(text: &str, budget: usize) -> Result<PackedRecord> {
    BitPacker::default().encode(text, budget)
}

/// Unpack with the default (space) padding.
///
/// # Errors
///
/// See [`BitPacker::decode`].
pub fn decode(words: &[u32], char_count: usize) -> Result<String> {
    BitPacker::default().decode(words, char_count)
}

/// Words needed for a byte budget; `None` for an invalid budget.
#[must_use]
pub fn words_for(budget: usize) -> Option<usize> {
    check_budget(budget).ok().map(|()| budget / WORD_BYTES)
}

pub(crate) fn check_budget(budget: usize) -> Result<()> {
    if budget == 0 || budget % WORD_BYTES != 0 {
        return Err(CodecError::InvalidBudget { budget });
    }
    Ok(())
}
