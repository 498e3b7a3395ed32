//! Nucleotide to model symbol mapping.
//!
//! `A`, `C`, `G`, `T` map to symbols 0-3 in that order. Everything else
//! (`N`, IUPAC ambiguity codes, gaps) maps to [`AMBIGUOUS`], which the model
//! codes as its current most likely base.

use crate::error::{ModelError, Result};
use crate::model::AMBIGUOUS;

/// Bases in symbol order.
pub const BASES: [u8; 4] = *b"ACGT";

/// IUPAC nucleotide letters accepted by [`try_symbol_for_base`] besides
/// `ACGT`.
const IUPAC_AMBIGUOUS: &[u8] = b"NRYKMSWBDHVU-*";

/// Lookup table from byte to symbol.
const SYMBOL_TABLE: [u8; 256] = {
    let mut table = [AMBIGUOUS; 256];
    let mut i = 0;
    while i < BASES.len() {
        table[BASES[i] as usize] = i as u8;
        table[BASES[i].to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
};

/// Map a base to its symbol. Unknown bytes become [`AMBIGUOUS`].
#[inline(always)]
pub fn symbol_for_base(base: u8) -> u8 {
    SYMBOL_TABLE[base as usize]
}

/// Map a base to its symbol, rejecting bytes that are not nucleotide codes.
pub fn try_symbol_for_base(base: u8) -> Result<u8> {
    let symbol = symbol_for_base(base);
    if symbol != AMBIGUOUS || IUPAC_AMBIGUOUS.contains(&base.to_ascii_uppercase()) {
        Ok(symbol)
    } else {
        Err(ModelError::InvalidSymbol(base))
    }
}

/// Map a concrete symbol back to its base.
#[inline]
pub fn base_for_symbol(symbol: u8) -> Result<u8> {
    BASES
        .get(symbol as usize)
        .copied()
        .ok_or(ModelError::InvalidSymbol(symbol))
}

/// Map a sequence of bases to symbols.
pub fn symbols_for_bases(bases: &[u8]) -> Vec<u8> {
    bases.iter().map(|&b| symbol_for_base(b)).collect()
}
