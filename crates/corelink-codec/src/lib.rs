// SPDX-License-Identifier: AGPL-3.0-only

//! Fixed-width text records for unit payloads.
//!
//! Strings are padded to a byte budget (a positive multiple of 4) and packed
//! four characters per big-endian 32-bit word. Decoding is the exact inverse:
//!
//! ```
//! use corelink_codec::{decode, encode};
//!
//! # fn main() -> corelink_codec::Result<()> {
//! let record = encode("hi", 4)?;
//! assert_eq!(record.words(), &[0x6869_2020]);
//! assert_eq!(decode(record.words(), 4)?, "hi  ");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod packer;
mod record;

pub use error::{CodecError, Result};
pub use packer::{decode, encode, words_for, BitPacker, PAD, REPLACEMENT, WORD_BYTES};
pub use record::{ByteOrder, CharRecord, PackedRecord};
