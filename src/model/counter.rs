//! Counter widths for [`FrequencyModel`](super::FrequencyModel).
//!
//! Narrow (`u8`) counters adapt in single steps and rescale often; wide
//! (`u16`) counters step by 8 and keep a longer memory. Both derive their
//! constants from the type width so that `CEILING + STEP` never overflows.

use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// Unsigned counter type usable as model state.
///
/// Sealed: only `u8` and `u16` are supported.
pub trait Counter: Copy + Ord + Default + fmt::Debug + Send + Sync + sealed::Sealed {
    /// Increment applied to a symbol's count per coding event.
    const STEP: Self;
    /// A rescale is forced once the total reaches this value.
    const CEILING: Self;
    /// Value counters are clamped up to after halving.
    const ONE: Self;
    /// Largest representable value, as `u32`.
    const MAX_COUNT: u32;

    /// Plain addition. Overflow panics in debug builds and wraps in release.
    fn add_count(self, rhs: Self) -> Self;

    /// Floor division by two.
    fn halve(self) -> Self;

    /// Widen to `u32` for coder arithmetic.
    fn widen(self) -> u32;

    /// Narrow from `u32`, or `None` if the value does not fit.
    fn narrow(v: u32) -> Option<Self>;
}

macro_rules! impl_counter {
    ($t:ty, $step:expr) => {
        impl Counter for $t {
            const STEP: Self = $step;
            const CEILING: Self = ((1u32 << <$t>::BITS) - 2 * $step) as $t;
            const ONE: Self = 1;
            const MAX_COUNT: u32 = <$t>::MAX as u32;

            #[inline(always)]
            fn add_count(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn halve(self) -> Self {
                self >> 1
            }

            #[inline(always)]
            fn widen(self) -> u32 {
                u32::from(self)
            }

            #[inline]
            fn narrow(v: u32) -> Option<Self> {
                <$t>::try_from(v).ok()
            }
        }
    };
}

impl_counter!(u8, 1);
impl_counter!(u16, 8);
