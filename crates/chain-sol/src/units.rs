//! Decimal-string to lamport conversion.
//!
//! One native coin is 10^9 lamports. Conversion floors: fractional
//! digits past the ninth place cannot be represented, so they are
//! dropped — but the dropped remainder is returned as `dust` so callers
//! can surface it instead of silently swallowing sub-unit value. All
//! arithmetic is integer over the digit string; `f64` never touches an
//! amount.

use crate::error::SolError;

/// Lamports per native coin (9 decimal places).
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

const SOL_DECIMALS: usize = 9;

/// A parsed amount: the floored lamport value, plus the sub-lamport
/// remainder that flooring dropped (as a decimal string), if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LamportAmount {
    pub lamports: u64,
    pub dust: Option<String>,
}

/// Parse a non-negative decimal string into lamports, flooring.
///
/// Rejects signs, exponents, malformed decimals, overflow, and amounts
/// that floor to zero lamports (a transfer of nothing is never sent).
pub fn parse_sol_amount(amount: &str) -> Result<LamportAmount, SolError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(SolError::InvalidAmount("amount is empty".into()));
    }
    if amount.starts_with('-') || amount.starts_with('+') {
        return Err(SolError::InvalidAmount(
            "amount must be an unsigned decimal".into(),
        ));
    }

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((i, f)) => (i, f),
        None => (amount, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(SolError::InvalidAmount("no digits in amount".into()));
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(SolError::InvalidAmount(format!(
            "not a plain decimal number: {amount:?}"
        )));
    }

    let int_value: u64 = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse()
            .map_err(|_| SolError::InvalidAmount("amount too large".into()))?
    };

    // Split the fraction at the ninth digit: the head is representable,
    // the tail is dust.
    let (kept, dropped) = if frac_part.len() > SOL_DECIMALS {
        frac_part.split_at(SOL_DECIMALS)
    } else {
        (frac_part, "")
    };

    let frac_value: u64 = if kept.is_empty() {
        0
    } else {
        let padding = 10u64.pow((SOL_DECIMALS - kept.len()) as u32);
        let kept: u64 = kept
            .parse()
            .map_err(|_| SolError::InvalidAmount("amount too large".into()))?;
        kept * padding
    };

    let lamports = int_value
        .checked_mul(LAMPORTS_PER_SOL)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(|| SolError::InvalidAmount("amount too large".into()))?;

    let dropped = dropped.trim_end_matches('0');
    let dust = if dropped.is_empty() {
        None
    } else {
        Some(format!("0.{}{}", "0".repeat(SOL_DECIMALS), dropped))
    };

    if lamports == 0 {
        return Err(SolError::InvalidAmount(if dust.is_some() {
            "amount floors to zero lamports".into()
        } else {
            "amount must be greater than zero".into()
        }));
    }

    Ok(LamportAmount { lamports, dust })
}

/// Render a lamport value back as a decimal coin string.
///
/// Inverse of [`parse_sol_amount`] for nonzero values:
/// `parse_sol_amount(&format_lamports(x))` yields `x` with no dust.
pub fn format_lamports(lamports: u64) -> String {
    let integral = lamports / LAMPORTS_PER_SOL;
    let remainder = lamports % LAMPORTS_PER_SOL;

    if remainder == 0 {
        return integral.to_string();
    }

    let frac = format!("{remainder:09}");
    format!("{}.{}", integral, frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_a_coin() {
        let parsed = parse_sol_amount("0.5").unwrap();
        assert_eq!(parsed.lamports, 500_000_000);
        assert_eq!(parsed.dust, None);
    }

    #[test]
    fn whole_coins() {
        assert_eq!(parse_sol_amount("3").unwrap().lamports, 3_000_000_000);
    }

    #[test]
    fn single_lamport() {
        assert_eq!(parse_sol_amount("0.000000001").unwrap().lamports, 1);
    }

    #[test]
    fn tenth_digit_becomes_dust() {
        let parsed = parse_sol_amount("0.1234567894").unwrap();
        assert_eq!(parsed.lamports, 123_456_789);
        assert_eq!(parsed.dust.as_deref(), Some("0.0000000004"));
    }

    #[test]
    fn trailing_zero_tail_is_not_dust() {
        let parsed = parse_sol_amount("0.5000000000").unwrap();
        assert_eq!(parsed.lamports, 500_000_000);
        assert_eq!(parsed.dust, None);
    }

    #[test]
    fn floor_to_zero_rejected() {
        let err = parse_sol_amount("0.0000000001").unwrap_err();
        assert!(err.to_string().contains("floors to zero"));
    }

    #[test]
    fn zero_rejected() {
        assert!(parse_sol_amount("0").is_err());
        assert!(parse_sol_amount("0.0").is_err());
    }

    #[test]
    fn malformed_inputs_rejected() {
        for bad in ["", " ", ".", "-1", "+0.5", "1.2.3", "sol", "1e9"] {
            assert!(parse_sol_amount(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn overflow_rejected() {
        // u64 lamports cap just above 18.4 billion coins.
        assert!(parse_sol_amount("18446744074").is_err());
    }

    #[test]
    fn format_whole_and_fractional() {
        assert_eq!(format_lamports(1_000_000_000), "1");
        assert_eq!(format_lamports(500_000_000), "0.5");
        assert_eq!(format_lamports(1), "0.000000001");
        assert_eq!(format_lamports(0), "0");
    }

    #[test]
    fn round_trips_exactly() {
        for v in [1u64, 999, 500_000_000, 1_000_000_000, 123_456_789_012] {
            let parsed = parse_sol_amount(&format_lamports(v)).unwrap();
            assert_eq!(parsed.lamports, v);
            assert_eq!(parsed.dust, None);
        }
    }
}
