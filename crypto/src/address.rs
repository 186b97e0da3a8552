//! Address encoding, decoding, and validation.
//!
//! Address format: `ban_` + base32(public key, 52 chars) + base32(checksum, 8 chars)
//!
//! Checksum: 5-byte Blake2b of the public key, byte-reversed before
//! encoding. The reversal is the ledger's wire convention and applies to
//! the checksum only; the public key field is encoded directly.

use banano_types::{AccountError, Address, PublicKey};

use crate::base32;
use crate::hash::checksum_40;

/// Total length of a legacy address (5-character prefix variant). Accepted
/// on decode, never produced on encode.
const LEGACY_LEN: usize = 65;
const LEGACY_PREFIX_LEN: usize = 5;

/// Checksum bytes travel in reverse order in the text form.
fn reversed(mut checksum: [u8; 5]) -> [u8; 5] {
    checksum.reverse();
    checksum
}

fn checksum_field(public: &PublicKey) -> String {
    let digest = reversed(checksum_40(public.as_bytes()));
    base32::encode_padded(&digest, Address::CHECKSUM_CHARS)
}

/// Encode a public key as a `ban_` address.
pub fn address_from_public_key(public: &PublicKey) -> Address {
    let pubkey_field = base32::encode_padded(public.as_bytes(), Address::PUBKEY_CHARS);
    let address = format!("{}{}{}", Address::PREFIX, pubkey_field, checksum_field(public));
    Address::new(address)
}

/// Extract the public key embedded in an address string.
///
/// Accepts the canonical 64-character form and the legacy 65-character
/// (5-character prefix) form; any other shape is a `Format` error. The
/// checksum is not verified here, use [`address_is_valid`] for that.
pub fn public_key_from_address(address: &str) -> Result<PublicKey, AccountError> {
    if !address.is_ascii() {
        return Err(AccountError::Format(address.to_string()));
    }
    let payload = match address.len() {
        Address::LEN => &address[Address::PREFIX.len()..Address::PREFIX.len() + Address::PUBKEY_CHARS],
        LEGACY_LEN => &address[LEGACY_PREFIX_LEN..LEGACY_PREFIX_LEN + Address::PUBKEY_CHARS],
        _ => return Err(AccountError::Format(address.to_string())),
    };
    let bytes: [u8; 32] = base32::decode_fixed(payload)?;
    Ok(PublicKey(bytes))
}

/// Check whether an address string is structurally well-formed and carries
/// a checksum matching its embedded public key.
///
/// Never errors: any malformed input simply reports `false`.
pub fn address_is_valid(address: &str) -> bool {
    if address.len() != Address::LEN || !address.is_ascii() {
        return false;
    }
    if !address.starts_with(Address::PREFIX) {
        return false;
    }

    // Structural pattern: one char in {1,3}, then 59 alphabet chars.
    let payload = &address.as_bytes()[Address::PREFIX.len()..];
    if !matches!(payload[0], b'1' | b'3') {
        return false;
    }
    if !payload[1..].iter().all(|&b| base32::is_symbol(b)) {
        return false;
    }

    let public = match public_key_from_address(address) {
        Ok(key) => key,
        Err(_) => return false,
    };

    // The recomputed checksum field is always exactly 8 characters, so the
    // comparison covers the full trailing field.
    let tail = &address[Address::LEN - Address::CHECKSUM_CHARS..];
    checksum_field(&public) == tail
}
