//! Range coding backend for frequency models.
//!
//! A model never touches bits. It describes each symbol as a sub-interval
//! `[low, low + freq)` of `[0, total)` and hands that to a coder through the
//! [`SymbolEncoder`] / [`SymbolDecoder`] traits. The coder is borrowed for the
//! duration of one call only.
//!
//! [`RangeEncoder`] and [`RangeDecoder`] are a byte-oriented range coder
//! (carry-propagating, 64-bit low / 32-bit range) that accepts totals up to
//! 2^16, enough for both counter widths.
//!
//! ## Protocol
//!
//! ```text
//! encode:  model ──encode(low, freq, total)──▶ RangeEncoder ──▶ bytes
//! decode:  model ──get_freq(total)──▶ RangeDecoder ──▶ p
//!          model ──decode(low, freq, total)──▶ RangeDecoder (consumes range)
//! ```

mod decoder;
mod encoder;

pub use decoder::RangeDecoder;
pub use encoder::RangeEncoder;

/// Renormalisation threshold: the range is kept at or above 2^24.
pub(crate) const TOP: u32 = 1 << 24;

/// Largest `total` a coder accepts.
pub const MAX_TOTAL: u32 = 1 << 16;

/// Sink side of the coder protocol.
pub trait SymbolEncoder {
    /// Commit the sub-interval `[low, low + freq)` of `[0, total)`.
    fn encode(&mut self, low: u32, freq: u32, total: u32);
}

/// Source side of the coder protocol.
pub trait SymbolDecoder {
    /// Current stream position scaled into `[0, total)`.
    ///
    /// Must be followed by exactly one [`decode`](Self::decode) call with the
    /// same `total`.
    fn get_freq(&mut self, total: u32) -> u32;

    /// Consume the sub-interval `[low, low + freq)` of `[0, total)` located
    /// from the preceding [`get_freq`](Self::get_freq).
    fn decode(&mut self, low: u32, freq: u32, total: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three-symbol static table: cumulative bounds.
    const TABLE: [(u32, u32); 3] = [(0, 5), (5, 2), (7, 9)];
    const TABLE_TOTAL: u32 = 16;

    fn lookup(p: u32) -> usize {
        TABLE
            .iter()
            .position(|&(low, freq)| p >= low && p < low + freq)
            .unwrap()
    }

    #[test]
    fn test_static_table_roundtrip() {
        let input: Vec<usize> = (0..5000).map(|i| (i * 7 + i / 3) % 3).collect();

        let mut enc = RangeEncoder::new();
        for &s in &input {
            let (low, freq) = TABLE[s];
            enc.encode(low, freq, TABLE_TOTAL);
        }
        let bytes = enc.finish();
        assert!(bytes.len() < input.len());

        let mut dec = RangeDecoder::new(&bytes);
        for &expected in &input {
            let p = dec.get_freq(TABLE_TOTAL);
            let s = lookup(p);
            let (low, freq) = TABLE[s];
            dec.decode(low, freq, TABLE_TOTAL);
            assert_eq!(s, expected);
        }
    }

    #[test]
    fn test_max_total_roundtrip() {
        // Tiny and huge intervals at the widest supported total.
        let intervals = [(0, 1), (1, MAX_TOTAL - 2), (MAX_TOTAL - 1, 1)];
        let input: Vec<usize> = (0..3000).map(|i| if i % 11 == 0 { 1 } else { i % 3 }).collect();

        let mut enc = RangeEncoder::new();
        for &s in &input {
            let (low, freq) = intervals[s];
            enc.encode(low, freq, MAX_TOTAL);
        }
        let bytes = enc.finish();

        let mut dec = RangeDecoder::new(&bytes);
        for &expected in &input {
            let p = dec.get_freq(MAX_TOTAL);
            let s = intervals
                .iter()
                .position(|&(low, freq)| p >= low && p < low + freq)
                .unwrap();
            dec.decode(intervals[s].0, intervals[s].1, MAX_TOTAL);
            assert_eq!(s, expected);
        }
    }

    #[test]
    fn test_empty_stream() {
        let bytes = RangeEncoder::new().finish();
        assert_eq!(bytes.len(), 5);
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bytes_written_trails_finish() {
        let mut enc = RangeEncoder::new();
        assert_eq!(enc.bytes_written(), 0);

        for i in 0..1000u32 {
            enc.encode(i % 4, 1, 4);
        }
        let written = enc.bytes_written();
        // 2 bits per symbol, minus what is still pending in the cache
        assert!(written > 200 && written <= 250, "{} bytes written", written);

        // The flush commits the cache plus four more bytes
        let bytes = enc.finish();
        assert!(bytes.len() >= written + 5);
    }

    #[test]
    fn test_dyn_coder() {
        let mut enc = RangeEncoder::new();
        {
            let sink: &mut dyn SymbolEncoder = &mut enc;
            sink.encode(0, 1, 2);
            sink.encode(1, 1, 2);
        }
        let bytes = enc.finish();
        let mut dec = RangeDecoder::new(&bytes);
        let source: &mut dyn SymbolDecoder = &mut dec;
        assert_eq!(source.get_freq(2), 0);
        source.decode(0, 1, 2);
        assert_eq!(source.get_freq(2), 1);
        source.decode(1, 1, 2);
    }
}
