// ============================================================================
// Wire Record
// Fixed 17-byte layout of an encoded decimal
// ============================================================================
//
// | offset | length | meaning                                  |
// |--------|--------|------------------------------------------|
// | 0      | 1      | sign: 1 = non-negative, 0 = negative     |
// | 1      | 4      | low word, little-endian u32              |
// | 5      | 4      | middle word, little-endian u32           |
// | 9      | 4      | high word, little-endian u32             |
// | 13     | 4      | padding, always zero                     |
//
// The record carries no scale: the reader supplies it.

use crate::numeric::{join_words, CodecError, CodecResult, MagnitudeWords};

/// Length of an encoded decimal in bytes.
pub const WIRE_LEN: usize = 17;

/// Sign byte for zero and positive values.
pub const SIGN_POSITIVE: u8 = 1;

/// Sign byte for negative values.
pub const SIGN_NEGATIVE: u8 = 0;

const SIGN_OFFSET: usize = 0;
const WORD_OFFSETS: [usize; 3] = [1, 5, 9];
const PADDING_OFFSET: usize = 13;

/// Decoded view of one 17-byte record: a sign flag and three magnitude words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WireRecord {
    negative: bool,
    words: MagnitudeWords,
}

impl WireRecord {
    /// Create a record from a sign flag and `[low, middle, high]`.
    #[inline]
    pub const fn new(negative: bool, words: MagnitudeWords) -> Self {
        Self { negative, words }
    }

    /// Whether the sign byte marks the value negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Magnitude words in wire order `[low, middle, high]`.
    #[inline]
    pub const fn words(&self) -> MagnitudeWords {
        self.words
    }

    /// Unsigned 96-bit magnitude.
    #[inline]
    pub const fn magnitude(&self) -> u128 {
        join_words(self.words)
    }

    /// Sign byte as written at offset 0.
    #[inline]
    pub const fn sign_byte(&self) -> u8 {
        if self.negative {
            SIGN_NEGATIVE
        } else {
            SIGN_POSITIVE
        }
    }

    /// Write the record into `buf`, overwriting all 17 bytes.
    pub fn write_to(&self, buf: &mut [u8; WIRE_LEN]) {
        buf[SIGN_OFFSET] = self.sign_byte();
        for (word, offset) in self.words.iter().zip(WORD_OFFSETS) {
            buf[offset..offset + 4].copy_from_slice(&word.to_le_bytes());
        }
        buf[PADDING_OFFSET..].fill(0);
    }

    /// Serialize to a fresh 17-byte buffer.
    pub fn to_bytes(&self) -> [u8; WIRE_LEN] {
        let mut buf = [0u8; WIRE_LEN];
        self.write_to(&mut buf);
        buf
    }

    /// Parse a record.
    ///
    /// Only the length is validated. A sign byte equal to [`SIGN_NEGATIVE`]
    /// marks the value negative; any other byte is non-negative. Padding is
    /// not inspected.
    ///
    /// # Errors
    /// Returns `InvalidLength` unless `bytes` is exactly 17 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        let bytes: &[u8; WIRE_LEN] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
            actual: Some(bytes.len()),
        })?;

        let negative = bytes[SIGN_OFFSET] == SIGN_NEGATIVE;
        let words = WORD_OFFSETS.map(|offset| {
            u32::from_le_bytes([
                bytes[offset],
                bytes[offset + 1],
                bytes[offset + 2],
                bytes[offset + 3],
            ])
        });

        Ok(Self { negative, words })
    }
}
