//! Fundamental types for Banano accounts.
//!
//! This crate defines the value types shared across the workspace:
//! keys, addresses, raw amounts, and the common error type.

pub mod address;
pub mod amount;
pub mod error;
pub mod keys;

pub use address::Address;
pub use amount::RawAmount;
pub use error::AccountError;
pub use keys::{KeyPair, PrivateKey, PublicKey};
