//! Adaptive order-0 frequency model over a 4-symbol alphabet.
//!
//! Intended for streams where one symbol usually dominates, e.g. the
//! nucleotides of an alignment column that mostly agree with a consensus.
//! Each instance keeps four counters and their running total; every coded
//! symbol bumps its counter by [`Counter::STEP`], and once the total reaches
//! [`Counter::CEILING`] all counters are halved so that recent statistics
//! dominate.
//!
//! ## Symbols
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0..=3` | Concrete alphabet symbol |
//! | `4` ([`AMBIGUOUS`]) | Unresolved input; coded as the current most frequent symbol |
//!
//! ## Counter widths
//!
//! | Type | Alias | STEP | CEILING |
//! |------|-------|------|---------|
//! | `u8` | [`NarrowModel`] | 1 | 254 |
//! | `u16` | [`WideModel`] | 8 | 65520 |
//!
//! ## Example
//!
//! ```rust
//! use base_model::{RangeDecoder, RangeEncoder, WideModel};
//!
//! let bases = [0u8, 0, 2, 0, 4, 0, 1];
//!
//! let mut model = WideModel::new();
//! let mut encoder = RangeEncoder::new();
//! let coded: Vec<u8> = bases
//!     .iter()
//!     .map(|&s| model.encode_symbol(&mut encoder, s))
//!     .collect();
//! let bytes = encoder.finish();
//!
//! let mut model = WideModel::new();
//! let mut decoder = RangeDecoder::new(&bytes);
//! let decoded: Vec<u8> = (0..bases.len())
//!     .map(|_| model.decode_symbol(&mut decoder))
//!     .collect();
//! assert_eq!(decoded, coded);
//! ```

mod counter;


pub use counter::Counter;

use crate::error::{ModelError, Result};
use crate::range_coder::{SymbolDecoder, SymbolEncoder};

/// Number of concrete symbols.
pub const SYMBOLS: usize = 4;

/// Symbol value for unresolved input.
pub const AMBIGUOUS: u8 = 4;

/// Frequency model with `u8` counters: faster adaptation, coarser statistics.
pub type NarrowModel = FrequencyModel<u8>;

/// Frequency model with `u16` counters: longer memory, finer statistics.
pub type WideModel = FrequencyModel<u16>;

/// Adaptive frequency model for four symbols.
///
/// Invariants held between calls:
/// - `total == counts[0] + counts[1] + counts[2] + counts[3]`
/// - `total < C::CEILING` whenever a coder is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyModel<C: Counter = u16> {
    counts: [C; SYMBOLS],
    total: C,
}

impl<C: Counter> FrequencyModel<C> {
    /// Create a model with a uniform prior of `3 * STEP` per symbol.
    pub fn new() -> Self {
        let mut model = Self {
            counts: [C::ONE; SYMBOLS],
            total: C::default(),
        };
        model.reset();
        model
    }

    /// Create a model from initial counts, copied verbatim.
    ///
    /// Skewed priors bias the first coded symbols. No validation is done;
    /// see [`try_with_counts`](Self::try_with_counts).
    pub fn with_counts(start: [C; SYMBOLS]) -> Self {
        let mut model = Self::new();
        model.reset_with(start);
        model
    }

    /// Create a model from initial counts, rejecting zero counts and totals
    /// that do not fit the counter width.
    pub fn try_with_counts(start: [u32; SYMBOLS]) -> Result<Self> {
        if let Some(symbol) = start.iter().position(|&c| c == 0) {
            return Err(ModelError::ZeroCount { symbol });
        }

        let total: u64 = start.iter().map(|&c| u64::from(c)).sum();
        let overflow = ModelError::CountOverflow {
            total,
            max: C::MAX_COUNT,
        };
        if total > u64::from(C::MAX_COUNT) {
            return Err(overflow);
        }

        let mut counts = [C::ONE; SYMBOLS];
        for (slot, &c) in counts.iter_mut().zip(start.iter()) {
            *slot = C::narrow(c).ok_or_else(|| overflow.clone())?;
        }
        Ok(Self::with_counts(counts))
    }

    /// Reset to the uniform prior.
    pub fn reset(&mut self) {
        let init = C::STEP.add_count(C::STEP).add_count(C::STEP);
        self.counts = [init; SYMBOLS];
        self.total = Self::sum(&self.counts);
    }

    /// Reset to the given counts, copied verbatim.
    pub fn reset_with(&mut self, start: [C; SYMBOLS]) {
        self.counts = start;
        self.total = Self::sum(&self.counts);
    }

    #[inline(always)]
    fn sum(counts: &[C; SYMBOLS]) -> C {
        counts[0]
            .add_count(counts[1])
            .add_count(counts[2])
            .add_count(counts[3])
    }

    /// Halve every counter (floor, minimum 1) and recompute the total.
    ///
    /// Runs automatically before any coding or update once the total has
    /// reached `C::CEILING`.
    pub fn rescale(&mut self) {
        let before = self.total;
        for c in &mut self.counts {
            *c = c.halve().max(C::ONE);
        }
        self.total = Self::sum(&self.counts);
        tracing::trace!(
            counter = std::any::type_name::<C>(),
            before = before.widen(),
            after = self.total.widen(),
            "rescaled frequency model"
        );
    }

    #[inline(always)]
    fn rescale_if_needed(&mut self) {
        if self.total >= C::CEILING {
            self.rescale();
        }
    }

    #[inline(always)]
    fn debug_check(&self) {
        debug_assert!(
            self.total < C::CEILING,
            "total {:?} reached ceiling {:?}",
            self.total,
            C::CEILING
        );
        debug_assert!(
            self.total == Self::sum(&self.counts),
            "total {:?} out of sync with counts {:?}",
            self.total,
            self.counts
        );
    }

    #[inline(always)]
    fn bump(&mut self, symbol: usize) {
        self.counts[symbol] = self.counts[symbol].add_count(C::STEP);
        self.total = self.total.add_count(C::STEP);
    }

    /// Index of the largest counter, ties going to the lowest index.
    ///
    /// Compares left to right (0 vs 1, winner vs 2, winner vs 3) with a
    /// strict `>`, so a later symbol only wins by being strictly larger.
    #[inline]
    pub fn top_index(&self) -> usize {
        let mut best = 0;
        if self.counts[1] > self.counts[best] {
            best = 1;
        }
        if self.counts[2] > self.counts[best] {
            best = 2;
        }
        if self.counts[3] > self.counts[best] {
            best = 3;
        }
        best
    }

    /// Encode `symbol` through `coder` and adapt.
    ///
    /// [`AMBIGUOUS`] is replaced by [`top_index`](Self::top_index). Returns
    /// the symbol actually coded.
    #[inline]
    pub fn encode_symbol<E>(&mut self, coder: &mut E, symbol: u8) -> u8
    where
        E: SymbolEncoder + ?Sized,
    {
        debug_assert!(symbol <= AMBIGUOUS, "symbol {} out of range", symbol);
        self.rescale_if_needed();

        let s = if symbol == AMBIGUOUS {
            self.top_index()
        } else {
            symbol as usize
        };

        self.debug_check();

        let low: u32 = self.counts[..s].iter().map(|c| c.widen()).sum();
        coder.encode(low, self.counts[s].widen(), self.total.widen());

        self.bump(s);
        s as u8
    }

    /// Decode one symbol from `coder` and adapt.
    #[inline]
    pub fn decode_symbol<D>(&mut self, coder: &mut D) -> u8
    where
        D: SymbolDecoder + ?Sized,
    {
        self.rescale_if_needed();
        self.debug_check();

        let total = self.total.widen();
        let p = coder.get_freq(total);

        // Symbols 0-2 are searched; anything beyond their mass is symbol 3
        let mut low = 0;
        let mut s = SYMBOLS - 1;
        for (i, c) in self.counts[..SYMBOLS - 1].iter().enumerate() {
            let freq = c.widen();
            if low + freq > p {
                s = i;
                break;
            }
            low += freq;
        }

        coder.decode(low, self.counts[s].widen(), total);

        self.bump(s);
        s as u8
    }

    /// Adapt to `symbol` without coding it.
    ///
    /// Keeps this instance in step with a peer that learned the symbol some
    /// other way. [`AMBIGUOUS`] only triggers a pending rescale.
    #[inline]
    pub fn update_symbol(&mut self, symbol: u8) {
        debug_assert!(symbol <= AMBIGUOUS, "symbol {} out of range", symbol);
        self.rescale_if_needed();

        if symbol == AMBIGUOUS {
            return;
        }
        self.bump(symbol as usize);
    }

    /// Largest counter value. A peaked model has a `top_sym` close to its
    /// [`summ_freq`](Self::summ_freq).
    #[inline]
    pub fn top_sym(&self) -> u32 {
        let [a, b, c, d] = self.counts;
        let ab = if a > b { a } else { b };
        let cd = if c > d { c } else { d };
        let top = if ab > cd { ab } else { cd };
        top.widen()
    }

    /// Sum of all counters.
    #[inline]
    pub fn summ_freq(&self) -> u32 {
        self.total.widen()
    }

    /// Current counters, widened.
    pub fn counts(&self) -> [u32; SYMBOLS] {
        self.counts.map(C::widen)
    }
}

impl<C: Counter> Default for FrequencyModel<C> {
    fn default() -> Self {
        Self::new()
    }
}
