//! Per-column coding.
//!
//! Alignment columns are independent statistical contexts: each one gets a
//! fresh [`FrequencyModel`] and its own range coder stream, so columns can be
//! coded in any order or in parallel.
//!
//! ## Configuration
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | [`ColumnOptions::prior`] | uniform | Initial counts for every column model |
//! | [`ColumnOptions::narrow`] | `false` | Use `u8` counters instead of `u16` |
//!
//! With the `parallel` feature, [`encode_columns`] and [`decode_columns`]
//! spread columns over the rayon thread pool.
//!
//! ## Example
//!
//! ```rust
//! use base_model::column::{decode_column, encode_column, ColumnOptions};
//! use base_model::symbol::symbols_for_bases;
//!
//! let opts = ColumnOptions::default();
//! let symbols = symbols_for_bases(b"AAAAGAAAANAAA");
//! let encoded = encode_column(&symbols, &opts)?;
//!
//! let decoded = decode_column(&encoded.bytes, symbols.len(), &opts)?;
//! assert_eq!(decoded, encoded.symbols);
//! # Ok::<(), base_model::ModelError>(())
//! ```


use crate::error::{ModelError, Result};
use crate::model::{Counter, FrequencyModel, AMBIGUOUS, SYMBOLS};
use crate::range_coder::{RangeDecoder, RangeEncoder};

/// Options shared by every column of a coding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    /// Initial counts for each column model. `None` uses the uniform prior.
    pub prior: Option<[u32; SYMBOLS]>,
    /// Use narrow (`u8`) counters.
    pub narrow: bool,
}

/// One coded column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedColumn {
    /// Range coder output.
    pub bytes: Vec<u8>,
    /// Symbols as coded, with ambiguous inputs resolved.
    pub symbols: Vec<u8>,
}

fn new_model<C: Counter>(opts: &ColumnOptions) -> Result<FrequencyModel<C>> {
    match opts.prior {
        Some(prior) => FrequencyModel::try_with_counts(prior),
        None => Ok(FrequencyModel::new()),
    }
}

fn encode_with<C: Counter>(symbols: &[u8], opts: &ColumnOptions) -> Result<EncodedColumn> {
    let mut model = new_model::<C>(opts)?;
    // Mostly-consensus columns code well under a bit per symbol
    let mut encoder = RangeEncoder::with_capacity(symbols.len() / 8 + 8);
    let mut coded = Vec::with_capacity(symbols.len());

    for &s in symbols {
        if s > AMBIGUOUS {
            return Err(ModelError::InvalidSymbol(s));
        }
        coded.push(model.encode_symbol(&mut encoder, s));
    }

    Ok(EncodedColumn {
        bytes: encoder.finish(),
        symbols: coded,
    })
}

fn decode_with<C: Counter>(bytes: &[u8], len: usize, opts: &ColumnOptions) -> Result<Vec<u8>> {
    let mut model = new_model::<C>(opts)?;
    let mut decoder = RangeDecoder::new(bytes);
    // `len` is caller-supplied, so size the buffer from the input instead
    let mut symbols = Vec::with_capacity(len.min(bytes.len().saturating_mul(8)));

    for _ in 0..len {
        symbols.push(model.decode_symbol(&mut decoder));
        // A well-formed stream is consumed exactly by its last symbol
        if decoder.is_overrun() {
            tracing::warn!(
                decoded = symbols.len(),
                expected = len,
                available = bytes.len(),
                "column decode read past end of stream"
            );
            return Err(ModelError::Truncated {
                decoded: symbols.len(),
                expected: len,
            });
        }
    }
    Ok(symbols)
}

/// Encode one column of symbols (`0..=4`) with a fresh model.
pub fn encode_column(symbols: &[u8], opts: &ColumnOptions) -> Result<EncodedColumn> {
    let encoded = if opts.narrow {
        encode_with::<u8>(symbols, opts)?
    } else {
        encode_with::<u16>(symbols, opts)?
    };
    tracing::debug!(
        symbols = symbols.len(),
        bytes = encoded.bytes.len(),
        narrow = opts.narrow,
        "encoded column"
    );
    Ok(encoded)
}

/// Decode `len` symbols of one column.
///
/// Fails with [`ModelError::Truncated`] as soon as decoding needs bytes past
/// the end of `bytes`; symbols decoded from zero padding are never returned.
pub fn decode_column(bytes: &[u8], len: usize, opts: &ColumnOptions) -> Result<Vec<u8>> {
    let decoded = if opts.narrow {
        decode_with::<u8>(bytes, len, opts)?
    } else {
        decode_with::<u16>(bytes, len, opts)?
    };
    tracing::debug!(bytes = bytes.len(), symbols = len, "decoded column");
    Ok(decoded)
}

/// Encode many columns, each with its own model and coder.
pub fn encode_columns<S>(columns: &[S], opts: &ColumnOptions) -> Result<Vec<EncodedColumn>>
where
    S: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        columns
            .par_iter()
            .map(|c| encode_column(c.as_ref(), opts))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        columns
            .iter()
            .map(|c| encode_column(c.as_ref(), opts))
            .collect()
    }
}

/// Decode many columns. `lengths[i]` is the symbol count of `streams[i]`.
pub fn decode_columns<S>(
    streams: &[S],
    lengths: &[usize],
    opts: &ColumnOptions,
) -> Result<Vec<Vec<u8>>>
where
    S: AsRef<[u8]> + Sync,
{
    if streams.len() != lengths.len() {
        tracing::warn!(
            streams = streams.len(),
            lengths = lengths.len(),
            "column stream and length counts differ"
        );
        return Err(ModelError::ColumnMismatch {
            streams: streams.len(),
            lengths: lengths.len(),
        });
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        streams
            .par_iter()
            .zip(lengths.par_iter())
            .map(|(s, &len)| decode_column(s.as_ref(), len, opts))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        streams
            .iter()
            .zip(lengths.iter())
            .map(|(s, &len)| decode_column(s.as_ref(), len, opts))
            .collect()
    }
}
