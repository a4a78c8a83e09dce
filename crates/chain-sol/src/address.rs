//! Ledger-chain recipient validation.
//!
//! An address is the Base58 encoding of a raw 32-byte Ed25519 public
//! key; there is no hashing step and no checksum beyond the length.

use crate::error::SolError;

/// Decode an address string to its 32-byte public key.
pub fn decode_pubkey(address: &str) -> Result<[u8; 32], SolError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })
}

/// Encode a 32-byte public key as an address string.
pub fn encode_pubkey(pubkey: &[u8; 32]) -> String {
    bs58::encode(pubkey).into_string()
}

/// Validate a recipient address without keeping the decoded key.
pub fn validate_recipient(address: &str) -> Result<(), SolError> {
    decode_pubkey(address).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The System Program key is 32 zero bytes.
    const SYSTEM_ADDRESS: &str = "11111111111111111111111111111111";

    #[test]
    fn system_program_round_trip() {
        let key = decode_pubkey(SYSTEM_ADDRESS).unwrap();
        assert_eq!(key, [0u8; 32]);
        assert_eq!(encode_pubkey(&key), SYSTEM_ADDRESS);
    }

    #[test]
    fn known_address_round_trips() {
        // The Token Program.
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let key = decode_pubkey(address).unwrap();
        assert_eq!(encode_pubkey(&key), address);
    }

    #[test]
    fn validate_accepts_valid_address() {
        assert!(validate_recipient(SYSTEM_ADDRESS).is_ok());
    }

    #[test]
    fn validate_rejects_garbage() {
        assert!(validate_recipient("not-a-valid-address!!!").is_err());
    }

    #[test]
    fn validate_rejects_short_decode() {
        // "1" decodes to a single zero byte.
        assert!(validate_recipient("1").is_err());
    }

    #[test]
    fn validate_rejects_empty() {
        assert!(validate_recipient("").is_err());
    }

    #[test]
    fn encode_is_deterministic() {
        let key = [0xffu8; 32];
        assert_eq!(encode_pubkey(&key), encode_pubkey(&key));
    }
}
