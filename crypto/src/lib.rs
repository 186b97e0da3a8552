//! Key derivation and address codec for Banano.
//!
//! - **Blake2b** for private-key derivation and address checksums
//! - **Ed25519** clamped base-point multiplication for public keys
//! - Custom base32 address encoding with `ban_` prefix (Nano lineage)
//!
//! Everything here is a pure function over fixed-size buffers and strings;
//! there is no state, no I/O, and nothing to coordinate between callers.

pub mod address;
pub mod base32;
pub mod hash;
pub mod keys;

pub use address::{address_from_public_key, address_is_valid, public_key_from_address};
pub use hash::{blake2b_256, blake2b_256_multi, blake2b_512, checksum_40};
pub use keys::{keypair_from_seed, private_key_from_seed, public_key_from_private};
