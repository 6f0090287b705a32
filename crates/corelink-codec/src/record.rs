//! Character and packed records.

use crate::error::{CodecError, Result};
use crate::packer::{check_budget, BitPacker, WORD_BYTES};
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Byte order of a raw word buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first (ARM device memory).
    #[default]
    Little,
}

/// Text paired with the byte budget it must be packed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRecord {
    text: String,
    budget: usize,
}

impl CharRecord {
    /// Create a record, checking the budget and the text length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBudget` or `TextTooLong`.
    pub fn new(text: impl Into<String>, budget: usize) -> Result<Self> {
        let text = text.into();
        check_budget(budget)?;
        let len = text.chars().count();
        if len > budget {
            return Err(CodecError::TextTooLong { len, budget });
        }
        Ok(Self { text, budget })
    }

    /// Unpadded text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte budget.
    #[must_use]
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Words the packed form occupies.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.budget / WORD_BYTES
    }

    /// Text right-padded with spaces to the budget.
    #[must_use]
    pub fn padded(&self) -> String {
        format!("{:<width$}", self.text, width = self.budget)
    }

    /// Pack with space padding.
    ///
    /// # Errors
    ///
    /// Infallible for a record built by [`new`](Self::new); the budget was checked there.
    pub fn pack(&self) -> Result<PackedRecord> {
        BitPacker::default().encode(&self.text, self.budget)
    }
}

/// Sequence of packed 32-bit words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedRecord(Vec<u32>);

impl PackedRecord {
    /// Packed words.
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.0
    }

    /// Take the words.
    #[must_use]
    pub fn into_words(self) -> Vec<u32> {
        self.0
    }

    /// Word count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Size in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.0.len() * WORD_BYTES
    }

    /// Decode `char_count` characters with space padding kept.
    ///
    /// # Errors
    ///
    /// See [`BitPacker::decode`].
    pub fn unpack(&self, char_count: usize) -> Result<String> {
        BitPacker::default().decode(&self.0, char_count)
    }

    /// Contiguous bytes for a payload writer.
    #[must_use]
    pub fn to_bytes(&self, order: ByteOrder) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.byte_len());
        for &word in &self.0 {
            match order {
                ByteOrder::Big => buf.put_u32(word),
                ByteOrder::Little => buf.put_u32_le(word),
            }
        }
        buf.freeze()
    }

    /// Words from a raw result buffer.
    ///
    /// # Errors
    ///
    /// Returns `MisalignedBuffer` if the length is not a multiple of 4.
    pub fn from_bytes(raw: &[u8], order: ByteOrder) -> Result<Self> {
        if raw.len() % WORD_BYTES != 0 {
            return Err(CodecError::MisalignedBuffer { len: raw.len() });
        }

        let mut buf = raw;
        let mut words = Vec::with_capacity(raw.len() / WORD_BYTES);
        while buf.has_remaining() {
            words.push(match order {
                ByteOrder::Big => buf.get_u32(),
                ByteOrder::Little => buf.get_u32_le(),
            });
        }
        Ok(Self(words))
    }
}

impl From<Vec<u32>> for PackedRecord {
    fn from(words: Vec<u32>) -> Self {
        Self(words)
    }
}

impl AsRef<[u32]> for PackedRecord {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}
