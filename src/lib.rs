//! Adaptive frequency model for coding nucleotide columns.
//!
//! A [`FrequencyModel`] tracks occurrence counts for a fixed 4-symbol
//! alphabet and drives a range coder with them. It is meant to be created once
//! per independent context (for example one alignment column) where most
//! observations are predictable.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`model`] | [`FrequencyModel`], counter widths, rescale policy |
//! | [`range_coder`] | Coder traits and a byte-oriented range coder |
//! | [`symbol`] | `ACGT` / ambiguous base mapping |
//! | [`column`] | One model + coder per column, optionally parallel |
//!
//! ## Features
//! - Core library depends only on `tracing`
//! - `parallel` - Column coding across a rayon thread pool
//!
//! ## Logging
//!
//! Rescales are reported at `trace` level and column coding at `debug` level
//! through [`tracing`]. The library never installs a subscriber.

pub mod column;
pub mod error;
pub mod model;
pub mod range_coder;
pub mod symbol;

pub use error::{ModelError, Result};
pub use model::{Counter, FrequencyModel, NarrowModel, WideModel, AMBIGUOUS, SYMBOLS};
pub use range_coder::{RangeDecoder, RangeEncoder, SymbolDecoder, SymbolEncoder};
