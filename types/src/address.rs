//! Account address type with `ban_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Banano account address, always prefixed with `ban_`.
///
/// Text layout: `ban_` + 52 base32 chars of public key + 8 base32 chars of
/// checksum, 64 characters total.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// The standard prefix for all Banano addresses.
    pub const PREFIX: &'static str = "ban_";

    /// Total length of a canonical address string.
    pub const LEN: usize = 64;

    /// Number of base32 characters encoding the public key.
    pub const PUBKEY_CHARS: usize = 52;

    /// Number of base32 characters encoding the checksum.
    pub const CHECKSUM_CHARS: usize = 8;

    /// Create a new address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `ban_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with ban_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 52-character public-key field following the prefix.
    pub fn pubkey_part(&self) -> &str {
        &self.0[Self::PREFIX.len()..Self::PREFIX.len() + Self::PUBKEY_CHARS]
    }

    /// The trailing 8-character checksum field.
    pub fn checksum_part(&self) -> &str {
        &self.0[self.0.len() - Self::CHECKSUM_CHARS..]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
