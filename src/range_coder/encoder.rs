//! Carry-propagating range encoder.
//!
//! Bytes equal to 0xFF are held back (`cache_size`) until it is known
//! whether a carry out of `low` will turn them into 0x00.

use super::{SymbolEncoder, MAX_TOTAL, TOP};

/// Range encoder writing into an in-memory buffer.
pub struct RangeEncoder {
    /// Low bound; bit 32 holds a pending carry
    low: u64,
    range: u32,
    /// Last byte not yet committed to the output
    cache: u8,
    /// Bytes pending: the cache byte plus any held-back 0xFF bytes
    cache_size: u64,
    out: Vec<u8>,
}

impl RangeEncoder {
    /// Create an encoder with an empty output buffer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an encoder with room for `capacity` output bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            low: 0,
            range: u32::MAX,
            cache: 0,
            cache_size: 1,
            out: Vec::with_capacity(capacity),
        }
    }

    /// Bytes committed so far (excludes pending cache bytes).
    pub fn bytes_written(&self) -> usize {
        self.out.len()
    }

    #[inline]
    fn shift_low(&mut self) {
        if (self.low as u32) < 0xFF00_0000 || (self.low >> 32) != 0 {
            let carry = (self.low >> 32) as u8;
            let mut byte = self.cache;
            loop {
                self.out.push(byte.wrapping_add(carry));
                byte = 0xFF;
                self.cache_size -= 1;
                if self.cache_size == 0 {
                    break;
                }
            }
            self.cache = (self.low >> 24) as u8;
        }
        self.cache_size += 1;
        self.low = (self.low & 0x00FF_FFFF) << 8;
    }

    /// Flush the remaining state and return the encoded bytes.
    pub fn finish(mut self) -> Vec<u8> {
        for _ in 0..5 {
            self.shift_low();
        }
        self.out
    }
}

impl Default for RangeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolEncoder for RangeEncoder {
    #[inline]
    fn encode(&mut self, low: u32, freq: u32, total: u32) {
        debug_assert!(total > 0 && total <= MAX_TOTAL);
        debug_assert!(freq > 0 && low + freq <= total);

        let r = self.range / total;
        self.low += u64::from(low * r);
        self.range = freq * r;
        while self.range < TOP {
            self.range <<= 8;
            self.shift_low();
        }
    }
}
