//! Blake2b hashing in the three output widths the address scheme uses.

use blake2::digest::consts::{U32, U5, U64};
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;
type Blake2b512 = Blake2b<U64>;
type Blake2b40 = Blake2b<U5>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute a 512-bit Blake2b hash of arbitrary data.
pub fn blake2b_512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Compute the 5-byte (40-bit) Blake2b digest used as an address checksum.
pub fn checksum_40(data: &[u8]) -> [u8; 5] {
    let mut hasher = Blake2b40::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 5];
    output.copy_from_slice(&result);
    output
}
