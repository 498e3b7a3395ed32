//! Range decoder over a byte slice.

use super::{SymbolDecoder, MAX_TOTAL, TOP};

/// Range decoder state.
///
/// Reading past the end of the input yields zero bytes, matching what the
/// encoder's final flush implies.
pub struct RangeDecoder<'a> {
    data: &'a [u8],
    pos: usize,
    code: u32,
    range: u32,
}

impl<'a> RangeDecoder<'a> {
    /// Initialize the decoder from the first five bytes of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        let mut decoder = Self {
            data,
            pos: 0,
            code: 0,
            range: u32::MAX,
        };
        // The first byte is the encoder's initial cache and carries no bits
        for _ in 0..5 {
            decoder.code = (decoder.code << 8) | u32::from(decoder.next_byte());
        }
        decoder
    }

    #[inline]
    fn next_byte(&mut self) -> u8 {
        let byte = self.data.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        byte
    }

    /// Bytes consumed from the input, including any zero padding read past
    /// the end.
    pub fn byte_position(&self) -> usize {
        self.pos
    }

    /// Check whether the decoder has read past the end of its input.
    pub fn is_overrun(&self) -> bool {
        self.pos > self.data.len()
    }

    #[inline]
    fn normalize(&mut self) {
        while self.range < TOP {
            self.code = (self.code << 8) | u32::from(self.next_byte());
            self.range <<= 8;
        }
    }
}

impl SymbolDecoder for RangeDecoder<'_> {
    #[inline]
    fn get_freq(&mut self, total: u32) -> u32 {
        debug_assert!(total > 0 && total <= MAX_TOTAL);
        self.range /= total;
        // Corrupt input can point past the last interval
        (self.code / self.range).min(total - 1)
    }

    #[inline]
    fn decode(&mut self, low: u32, freq: u32, total: u32) {
        debug_assert!(freq > 0 && low + freq <= total);
        self.code = self.code.wrapping_sub(low.wrapping_mul(self.range));
        self.range = self.range.wrapping_mul(freq);
        self.normalize();
    }
}
