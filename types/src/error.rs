//! Shared error type for key derivation and address handling.

use thiserror::Error;

/// Errors surfaced by key derivation, base32 codec, and address parsing.
///
/// All operations are pure and deterministic, so a failure on given input
/// will always fail identically; callers are expected to propagate rather
/// than retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("could not decode input: {0}")]
    Decode(String),

    #[error("wrong length: expected {expected}, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("could not parse address ({0})")]
    Format(String),

    #[error("invalid base32 symbol {0:?}")]
    InvalidSymbol(char),

    #[error("curve arithmetic failure")]
    Curve,
}
