//! Exact decimal-string to smallest-unit conversion.
//!
//! Wallet UIs hand over amounts as decimal strings ("1.25"). Scaling
//! them through `f64` silently corrupts values past 2^53, so this
//! module never leaves integer arithmetic: the digit string is split at
//! the decimal point and recombined as `int * 10^decimals + frac` over
//! `U256`. Conversion is exact or it is an error — fractional digits
//! that do not fit in `decimals` places reject the amount rather than
//! rounding it.

use alloy_primitives::U256;

use crate::error::EvmError;

/// Decimal places of the chain's native unit (1 ETH = 10^18 wei).
pub const ETH_DECIMALS: u32 = 18;

/// Parse a non-negative decimal string into smallest units, exactly.
///
/// Accepts `"1"`, `"1.25"`, `".5"` and trailing fractional zeros.
/// Rejects signs, exponents, multiple decimal points, fractional
/// precision beyond `decimals` places, and values that overflow 256
/// bits.
pub fn parse_units(amount: &str, decimals: u32) -> Result<U256, EvmError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(EvmError::InvalidAmount("amount is empty".into()));
    }
    if amount.starts_with('-') || amount.starts_with('+') {
        return Err(EvmError::InvalidAmount(
            "amount must be an unsigned decimal".into(),
        ));
    }

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((i, f)) => (i, f),
        None => (amount, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(EvmError::InvalidAmount("no digits in amount".into()));
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(EvmError::InvalidAmount(format!(
            "not a plain decimal number: {amount:?}"
        )));
    }

    // Trailing fractional zeros carry no value and never cost precision.
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.len() > decimals as usize {
        return Err(EvmError::InvalidAmount(format!(
            "more than {decimals} fractional digits cannot be represented"
        )));
    }

    let scale = U256::from(10u64).pow(U256::from(decimals));
    let int_value = if int_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_part, 10)
            .map_err(|_| EvmError::InvalidAmount("amount too large".into()))?
    };

    // Pad the kept fractional digits out to full smallest-unit width.
    let frac_value = if frac_part.is_empty() {
        U256::ZERO
    } else {
        let padded = 10u64.pow(decimals - frac_part.len() as u32);
        U256::from_str_radix(frac_part, 10)
            .map_err(|_| EvmError::InvalidAmount("amount too large".into()))?
            * U256::from(padded)
    };

    int_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(|| EvmError::InvalidAmount("amount too large".into()))
}

/// Render a smallest-unit value back as a decimal string.
///
/// Inverse of [`parse_units`]: `parse_units(&format_units(x, d), d)`
/// returns `x` for every `x`.
pub fn format_units(value: U256, decimals: u32) -> String {
    let scale = U256::from(10u64).pow(U256::from(decimals));
    let integral = value / scale;
    let remainder = value % scale;

    if remainder.is_zero() {
        return integral.to_string();
    }

    let digits = remainder.to_string();
    let zeros = "0".repeat(decimals as usize - digits.len());
    let frac = format!("{zeros}{digits}");
    format!("{}.{}", integral, frac.trim_end_matches('0'))
}
