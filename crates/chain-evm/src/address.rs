//! EVM recipient address validation.
//!
//! Accepts `0x` + 40 hex characters. All-lowercase and all-uppercase
//! forms carry no checksum and pass on syntax alone; mixed-case forms
//! must match the EIP-55 checksum exactly, so a single miscased letter
//! rejects the address before anything is signed.

use sha3::{Digest, Keccak256};

use crate::error::EvmError;

/// Validate a recipient address for the account chain.
///
/// Returns an error describing the first syntax or checksum problem
/// found. A passing address is safe to hand to the provider verbatim.
pub fn validate_recipient(address: &str) -> Result<(), EvmError> {
    let hex_part = strip_prefix(address)?;

    if hex_part.len() != 40 {
        return Err(EvmError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EvmError::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    // No checksum to verify unless the case is mixed.
    let any_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
    let any_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
    if !(any_upper && any_lower) {
        return Ok(());
    }

    let expected = eip55(hex_part);
    if expected == hex_part {
        Ok(())
    } else {
        Err(EvmError::InvalidAddress("EIP-55 checksum mismatch".into()))
    }
}

/// Render an address in EIP-55 checksummed form.
pub fn to_checksum(address: &str) -> Result<String, EvmError> {
    let hex_part = strip_prefix(address)?;

    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EvmError::InvalidAddress(
            "expected 0x followed by 40 hex characters".into(),
        ));
    }

    Ok(format!("0x{}", eip55(&hex_part.to_lowercase())))
}

fn strip_prefix(address: &str) -> Result<&str, EvmError> {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EvmError::InvalidAddress("address must start with 0x".into()))
}

/// EIP-55: uppercase the i-th hex letter iff the i-th nibble of
/// Keccak-256(lowercase address) is >= 8.
fn eip55(hex_part: &str) -> String {
    let lower = hex_part.to_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    lower
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if c.is_ascii_digit() {
                return c;
            }
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test vectors from EIP-55.
    const CHECKSUMMED: [&str; 4] = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn checksum_known_vectors() {
        for expected in CHECKSUMMED {
            let lower = expected.to_lowercase();
            assert_eq!(to_checksum(&lower).unwrap(), expected);
        }
    }

    #[test]
    fn validate_checksummed_addresses() {
        for addr in CHECKSUMMED {
            assert!(validate_recipient(addr).is_ok());
        }
    }

    #[test]
    fn validate_all_lowercase() {
        assert!(validate_recipient("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_ok());
    }

    #[test]
    fn validate_all_uppercase() {
        assert!(validate_recipient("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").is_ok());
    }

    #[test]
    fn validate_bad_checksum_rejected() {
        // One letter miscased relative to the checksum form.
        let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD";
        assert!(validate_recipient(addr).is_err());
    }

    #[test]
    fn validate_short_address_rejected() {
        assert!(validate_recipient("0x5aAeb6053F").is_err());
    }

    #[test]
    fn validate_missing_prefix_rejected() {
        assert!(validate_recipient("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_err());
    }

    #[test]
    fn validate_non_hex_rejected() {
        assert!(validate_recipient("0xGGGGb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
    }

    #[test]
    fn validate_empty_rejected() {
        assert!(validate_recipient("").is_err());
    }

    #[test]
    fn checksum_is_idempotent() {
        let addr = CHECKSUMMED[0];
        assert_eq!(to_checksum(addr).unwrap(), addr);
    }
}
