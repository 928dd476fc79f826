//! Conversion between digit strings in bases 2 to 36 and exact integers.

use num_bigint::{BigInt, Sign};

use crate::{
    constants::params::{PARAM_MAX_BASE, PARAM_MIN_BASE},
    error::DecodeError,
};

fn check_base(base: u32) -> Result<(), DecodeError> {
    if !(PARAM_MIN_BASE..=PARAM_MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase(base));
    }
    Ok(())
}

/// Decode `digits` written in `base` into its exact value.
///
/// Digits are `0-9` followed by `a-z`, case-insensitive. The string is consumed left to right as
/// `result = result * base + digit`, so there is no bound on its length.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, DecodeError> {
    check_base(base)?;
    if digits.is_empty() {
        return Err(DecodeError::EmptyDigits);
    }

    let mut result = BigInt::ZERO;
    for (position, c) in digits.chars().enumerate() {
        // `to_digit(36)` maps the whole alphabet, the base check below rejects the rest
        let digit = match c.to_digit(PARAM_MAX_BASE) {
            Some(d) if d < base => d,
            _ => {
                return Err(DecodeError::InvalidDigit {
                    digit: c,
                    position,
                    base,
                })
            }
        };
        result = result * base + digit;
    }

    Ok(result)
}

/// Encode a non-negative `value` in `base` using lowercase digits.
///
/// Negative values are rendered with a leading `-`, which [`decode`] rejects.
pub fn encode(value: &BigInt, base: u32) -> Result<String, DecodeError> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}

/// True if `value` can round-trip through a share document.
pub(crate) fn is_encodable(value: &BigInt) -> bool {
    value.sign() != Sign::Minus
}
