//! Decimal-string conversion between banano and raw.

use banano_types::RawAmount;
use thiserror::Error;

/// Number of fractional decimal digits in one banano (10^29 raw).
const BANANO_DECIMALS: usize = 29;

/// Errors from unit conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("could not parse amount: {0}")]
    Parse(String),
}

/// Split a non-negative decimal literal into integer and fraction digits.
fn split_decimal(s: &str) -> Result<(&str, &str), UnitError> {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(UnitError::Parse(format!("empty amount {s:?}")));
    }
    let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !digits_only(int_part) || !digits_only(frac_part) {
        return Err(UnitError::Parse(format!("invalid amount {s:?}")));
    }
    Ok((int_part, frac_part))
}

/// Convert a banano amount (decimal string) to raw (integer string).
///
/// Exact: the amount is scaled by 10^29 in u128 arithmetic. Inputs with
/// more than 29 fractional digits would not be whole raw and are rejected,
/// as are negative amounts and values past the u128 range.
pub fn banano_to_raw(banano: &str) -> Result<String, UnitError> {
    let (int_part, frac_part) = split_decimal(banano)?;
    if frac_part.len() > BANANO_DECIMALS {
        return Err(UnitError::Parse(format!(
            "more than {BANANO_DECIMALS} fractional digits in {banano:?}"
        )));
    }

    let whole: u128 = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse()
            .map_err(|_| UnitError::Parse(format!("amount out of range: {banano:?}")))?
    };
    let frac: u128 = if frac_part.is_empty() {
        0
    } else {
        // At most 29 digits, always fits.
        frac_part
            .parse()
            .map_err(|_| UnitError::Parse(format!("invalid amount {banano:?}")))?
    };
    let frac_scale = 10u128.pow((BANANO_DECIMALS - frac_part.len()) as u32);

    let raw = whole
        .checked_mul(RawAmount::RAW_PER_BANANO)
        .and_then(|r| r.checked_add(frac * frac_scale))
        .ok_or_else(|| UnitError::Parse(format!("amount out of range: {banano:?}")))?;

    Ok(raw.to_string())
}

/// Convert a raw amount (integer string) to banano (decimal string).
///
/// Trailing fractional zeros are trimmed; whole amounts carry no decimal
/// point.
pub fn raw_to_banano(raw: &str) -> Result<String, UnitError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UnitError::Parse(format!("invalid raw amount {raw:?}")));
    }
    let value: u128 = raw
        .parse()
        .map_err(|_| UnitError::Parse(format!("raw amount out of range: {raw:?}")))?;

    let whole = value / RawAmount::RAW_PER_BANANO;
    let frac = value % RawAmount::RAW_PER_BANANO;
    if frac == 0 {
        return Ok(whole.to_string());
    }

    let mut frac_digits = format!("{:029}", frac);
    while frac_digits.ends_with('0') {
        frac_digits.pop();
    }
    Ok(format!("{whole}.{frac_digits}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_BANANO_RAW: &str = "100000000000000000000000000000";

    #[test]
    fn one_banano() {
        assert_eq!(banano_to_raw("1").unwrap(), ONE_BANANO_RAW);
        assert_eq!(raw_to_banano(ONE_BANANO_RAW).unwrap(), "1");
    }

    #[test]
    fn fractional_amounts() {
        assert_eq!(
            banano_to_raw("1.5").unwrap(),
            "150000000000000000000000000000"
        );
        assert_eq!(
            raw_to_banano("150000000000000000000000000000").unwrap(),
            "1.5"
        );
        assert_eq!(
            banano_to_raw("0.0000001").unwrap(),
            "10000000000000000000000"
        );
    }

    #[test]
    fn zero() {
        assert_eq!(banano_to_raw("0").unwrap(), "0");
        assert_eq!(raw_to_banano("0").unwrap(), "0");
    }

    #[test]
    fn smallest_raw() {
        assert_eq!(raw_to_banano("1").unwrap(), "0.00000000000000000000000000001");
        assert_eq!(
            banano_to_raw("0.00000000000000000000000000001").unwrap(),
            "1"
        );
    }

    #[test]
    fn trailing_zeros_normalized() {
        assert_eq!(banano_to_raw("1.50").unwrap(), banano_to_raw("1.5").unwrap());
        // 1.50 raw -> banano -> prints without trailing zeros.
        let raw = banano_to_raw("2.25").unwrap();
        assert_eq!(raw_to_banano(&raw).unwrap(), "2.25");
    }

    #[test]
    fn bare_fraction_and_bare_integer_forms() {
        assert_eq!(banano_to_raw(".5").unwrap(), banano_to_raw("0.5").unwrap());
        assert_eq!(banano_to_raw("3.").unwrap(), banano_to_raw("3").unwrap());
    }

    #[test]
    fn roundtrip_through_raw() {
        for amount in ["1", "19", "123.456", "0.000000000000000000000000001"] {
            let raw = banano_to_raw(amount).unwrap();
            assert_eq!(raw_to_banano(&raw).unwrap(), amount);
        }
    }

    #[test]
    fn malformed_inputs_rejected() {
        for bad in ["", ".", "abc", "1.2.3", "-1", "+1", "1e5", "1 "] {
            assert!(banano_to_raw(bad).is_err(), "accepted {bad:?}");
        }
        for bad in ["", "1.5", "abc", "-1"] {
            assert!(raw_to_banano(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn excess_precision_rejected() {
        // 30 fractional digits cannot be represented in whole raw.
        let err = banano_to_raw("0.000000000000000000000000000001").unwrap_err();
        assert!(matches!(err, UnitError::Parse(_)));
    }

    #[test]
    fn overflow_rejected() {
        // ~3.4e38 raw is the u128 ceiling; 10^10 banano = 10^39 raw exceeds it.
        assert!(banano_to_raw("10000000000").is_err());
        assert!(raw_to_banano("340282366920938463463374607431768211456").is_err());
    }
}
