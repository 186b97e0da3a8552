//! Custom base32 codec for the Banano address format.
//!
//! Alphabet: `13456789abcdefghijkmnopqrstuwxyz` (digits 1, 3-9 then lowercase
//! letters, omitting 0/2/l/o/v to avoid visual ambiguity). This is NOT
//! RFC 4648: a byte sequence is interpreted as one big-endian unsigned
//! integer and re-expressed in radix 32, most significant symbol first, with
//! no leading padding. Callers left-pad to a fixed field width with the
//! filler symbol `'1'` (alphabet value 0), which does not change the
//! represented value.

use banano_types::AccountError;

/// The 32-symbol alphabet, index 0..31.
pub const ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// The padding symbol, mapped to value 0.
pub const FILLER: char = '1';

/// Reverse lookup table: ASCII byte → symbol value (0xFF = invalid).
const SYMBOL_VALUES: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Whether `byte` is a character of the alphabet.
pub(crate) fn is_symbol(byte: u8) -> bool {
    byte < 128 && SYMBOL_VALUES[byte as usize] != 0xFF
}

fn symbol_value(c: char) -> Result<u8, AccountError> {
    let code = c as u32;
    if code >= 128 {
        return Err(AccountError::InvalidSymbol(c));
    }
    let value = SYMBOL_VALUES[code as usize];
    if value == 0xFF {
        return Err(AccountError::InvalidSymbol(c));
    }
    Ok(value)
}

/// Extract the `group`-th 5-bit digit, counted from the least significant
/// bit of the big-endian byte sequence.
fn five_bits(bytes: &[u8], group: usize) -> u8 {
    let mut value = 0u8;
    for bit in 0..5 {
        let pos = group * 5 + bit;
        if pos >= bytes.len() * 8 {
            break;
        }
        let byte = bytes[bytes.len() - 1 - pos / 8];
        if byte >> (pos % 8) & 1 == 1 {
            value |= 1 << bit;
        }
    }
    value
}

/// Encode a byte sequence as base32, minimal-length form.
///
/// A zero value (including the empty input) encodes as a single `'1'`.
pub fn encode(bytes: &[u8]) -> String {
    let groups = (bytes.len() * 8).div_ceil(5).max(1);
    let mut digits = Vec::with_capacity(groups);
    for group in 0..groups {
        digits.push(five_bits(bytes, group));
    }
    // Digits were collected least significant first; drop leading zeros.
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    digits
        .iter()
        .rev()
        .map(|&d| ALPHABET[d as usize] as char)
        .collect()
}

/// Encode and left-pad with `'1'` to exactly `width` symbols.
pub fn encode_padded(bytes: &[u8], width: usize) -> String {
    let encoded = encode(bytes);
    let mut result = String::with_capacity(width);
    for _ in 0..width.saturating_sub(encoded.len()) {
        result.push(FILLER);
    }
    result.push_str(&encoded);
    result
}

/// Decode a base32 string into a fixed-size big-endian byte array.
///
/// The string must be exactly the padded field width for `N` bytes,
/// `ceil(8N/5)` symbols (52 for a public key, 8 for a checksum).
pub fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], AccountError> {
    let expected = (N * 8).div_ceil(5);
    let actual = s.chars().count();
    if actual != expected {
        return Err(AccountError::Length { expected, actual });
    }

    let mut out = [0u8; N];
    for c in s.chars() {
        let mut carry = symbol_value(c)? as u16;
        // Multiply the accumulated value by 32 and add the new digit.
        for byte in out.iter_mut().rev() {
            let v = ((*byte as u16) << 5) | carry;
            *byte = v as u8;
            carry = v >> 8;
        }
        if carry != 0 {
            return Err(AccountError::Decode(format!(
                "base32 value does not fit in {N} bytes"
            )));
        }
    }
    Ok(out)
}
