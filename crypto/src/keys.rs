//! Deterministic key derivation: seed → private key → public key.

use banano_types::{AccountError, KeyPair, PrivateKey, PublicKey};
use curve25519_dalek::edwards::EdwardsPoint;

use crate::hash::{blake2b_256_multi, blake2b_512};

/// Derive the private key at `index` from a 64-character hex seed.
///
/// The key is `Blake2b-256(seed || index_be32)`, so distinct indices yield
/// independent keys from the same seed.
pub fn private_key_from_seed(seed_hex: &str, index: u32) -> Result<PrivateKey, AccountError> {
    let seed_bytes = hex::decode(seed_hex)
        .map_err(|e| AccountError::Decode(format!("could not decode seed: {e}")))?;
    if seed_bytes.len() != 32 {
        return Err(AccountError::Length {
            expected: 32,
            actual: seed_bytes.len(),
        });
    }

    let digest = blake2b_256_multi(&[&seed_bytes, &index.to_be_bytes()]);
    Ok(PrivateKey(digest))
}

/// Derive the public key for a private key.
///
/// The private key is expanded with Blake2b-512; the low 32 bytes become an
/// Ed25519 scalar under the standard clamping rules and multiply the curve
/// base point. The result is the point's canonical compressed encoding.
///
/// The `Curve` error is reserved for a backend signalling an internal
/// fault; the dalek primitives are total over 32-byte input.
pub fn public_key_from_private(private: &PrivateKey) -> Result<PublicKey, AccountError> {
    let expanded = blake2b_512(private.as_bytes());
    let mut scalar_bytes = [0u8; 32];
    scalar_bytes.copy_from_slice(&expanded[..32]);

    let point = EdwardsPoint::mul_base_clamped(scalar_bytes);
    Ok(PublicKey(point.compress().to_bytes()))
}

/// Derive the full key pair at `index` from a hex seed.
pub fn keypair_from_seed(seed_hex: &str, index: u32) -> Result<KeyPair, AccountError> {
    let private = private_key_from_seed(seed_hex, index)?;
    let public = public_key_from_private(&private)?;
    Ok(KeyPair { public, private })
}

#[cfg(test)]
mod tests {
    use super::*;
    use banano_types::AccountError;

    const ZERO_SEED: &str = "0000000000000000000000000000000000000000000000000000000000000000";

    #[test]
    fn zero_seed_index_zero_fixture() {
        let private = private_key_from_seed(ZERO_SEED, 0).unwrap();
        assert_eq!(
            hex::encode(private.as_bytes()),
            "9f0e444c69f77a49bd0be89db92c38fe713e0963165cca12faf5712d7657120f"
        );

        let public = public_key_from_private(&private).unwrap();
        assert_eq!(
            hex::encode(public.as_bytes()),
            "c008b814a7d269a1fa3c6528b19201a24d797912db9996ff02a1ff356e45552b"
        );
    }

    #[test]
    fn zero_seed_index_one_fixture() {
        let private = private_key_from_seed(ZERO_SEED, 1).unwrap();
        assert_eq!(
            hex::encode(private.as_bytes()),
            "b73b723bf7bd042b66ad3332718ba98de7312f95ed3d05a130c9204552a7afff"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let seed = "b0".repeat(32);
        let k1 = private_key_from_seed(&seed, 7).unwrap();
        let k2 = private_key_from_seed(&seed, 7).unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());

        let p1 = public_key_from_private(&k1).unwrap();
        let p2 = public_key_from_private(&k2).unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn indices_are_separated() {
        let k0 = private_key_from_seed(ZERO_SEED, 0).unwrap();
        let k1 = private_key_from_seed(ZERO_SEED, 1).unwrap();
        assert_ne!(k0.as_bytes(), k1.as_bytes());
    }

    #[test]
    fn uppercase_hex_accepted() {
        let lower = private_key_from_seed(&"ab".repeat(32), 0).unwrap();
        let upper = private_key_from_seed(&"AB".repeat(32), 0).unwrap();
        assert_eq!(lower.as_bytes(), upper.as_bytes());
    }

    // PrivateKey has no Debug impl, so these assertions must never try to
    // format the Ok side of the Result.
    #[test]
    fn malformed_hex_rejected() {
        assert!(matches!(
            private_key_from_seed(&"zz".repeat(32), 0),
            Err(AccountError::Decode(_))
        ));

        // Odd number of hex digits.
        assert!(matches!(
            private_key_from_seed("abc", 0),
            Err(AccountError::Decode(_))
        ));
    }

    #[test]
    fn wrong_seed_length_rejected() {
        assert!(matches!(
            private_key_from_seed(&"ab".repeat(16), 0),
            Err(AccountError::Length {
                expected: 32,
                actual: 16
            })
        ));
    }

    #[test]
    fn keypair_from_seed_matches_two_step_derivation() {
        let kp = keypair_from_seed(ZERO_SEED, 0).unwrap();
        let private = private_key_from_seed(ZERO_SEED, 0).unwrap();
        let public = public_key_from_private(&private).unwrap();
        assert_eq!(kp.public, public);
        assert_eq!(kp.private.as_bytes(), private.as_bytes());
    }
}
