//! Conversion between banano display units and raw ledger units.
//!
//! 1 banano = 10^29 raw. Conversions work on decimal-formatted strings and
//! are exact: amounts are scaled u128 integers, never floats.

pub mod convert;

pub use convert::{banano_to_raw, raw_to_banano, UnitError};
